//! Energy Rush engine — simulation core for an incremental clicker.
//!
//! The engine owns the canonical game state and the four transitions
//! that may mutate it: the fixed 100 ms passive tick, the manual click
//! with its critical roll, the upgrade purchase and the prestige reset.
//! Presentation (layout, sound, floating text) lives in the host, which
//! reads snapshots, drains events and invokes the session methods.
//!
//! ```
//! use energy_rush_engine::GameSession;
//!
//! let mut session = GameSession::new(0xC0FFEE);
//! let outcome = session.click();
//! assert!(outcome.gain >= 1.0);
//! assert_eq!(session.snapshot().total_clicks, 1);
//! ```

pub mod achievements;
pub mod error;
pub mod logic;
pub mod rng;
pub mod session;
pub mod state;
pub mod time;

mod simulator;

pub use error::EngineError;
pub use logic::{
    ClickOutcome, PrestigeReceipt, PurchaseReceipt, COST_GROWTH, CRITICAL_FACTOR,
    PRESTIGE_MULTIPLIER_FACTOR, PRESTIGE_THRESHOLD,
};
pub use rng::{FixedRolls, GameRng, RollSource};
pub use session::{EngineEvent, GameSession};
pub use state::{GameState, LogEntry, OwnedUpgrade, Resource, UpgradeKind};
pub use time::{TickClock, TICK_MS};
