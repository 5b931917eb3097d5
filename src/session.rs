//! Session facade consumed by the presentation layer.
//!
//! `GameSession` is the single writer of the game state. The host calls
//! `tick` from its 100 ms schedule and the user-action methods from its
//! input handling; Rust's `&mut self` receivers serialize the
//! transitions, so no two ever overlap.

use std::collections::BTreeSet;

use crate::achievements;
use crate::error::EngineError;
use crate::logic::{self, ClickOutcome, PrestigeReceipt, PurchaseReceipt};
use crate::rng::{GameRng, RollSource};
use crate::state::{GameState, UpgradeKind};

/// Keep at most this many undrained events.
const MAX_PENDING_EVENTS: usize = 64;

/// Transient notification for the presentation layer.
///
/// Drained by the host and rendered however it likes (floating text,
/// sound, toast); the engine only records that the moment happened.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    CriticalStrike { gain: f64 },
    AchievementUnlocked { id: &'static str },
    Prestiged { level: u32 },
}

/// A running game session: canonical state, monotonic unlocked set and
/// the pending event queue.
pub struct GameSession<R = GameRng> {
    state: GameState,
    rng: R,
    unlocked: BTreeSet<&'static str>,
    events: Vec<EngineEvent>,
}

impl GameSession<GameRng> {
    /// New session with the deterministic built-in random source.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }
}

impl<R: RollSource> GameSession<R> {
    /// New session with a host-supplied random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: GameState::new(),
            rng,
            unlocked: BTreeSet::new(),
            events: Vec::new(),
        }
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    /// Apply one passive production step. Called by the host's fixed
    /// 100 ms schedule (see `TickClock`).
    pub fn tick(&mut self) {
        logic::tick(&mut self.state);
        self.refresh_achievements();
    }

    /// Apply one manual click. The outcome reports whether the gain was
    /// a critical strike.
    pub fn click(&mut self) -> ClickOutcome {
        let outcome = logic::click(&mut self.state, &mut self.rng);
        if outcome.critical {
            self.push_event(EngineEvent::CriticalStrike { gain: outcome.gain });
        }
        self.refresh_achievements();
        outcome
    }

    /// Buy one unit of the upgrade with this id.
    pub fn purchase(&mut self, id: &str) -> Result<PurchaseReceipt, EngineError> {
        let kind = self.resolve(id)?;
        let receipt = logic::purchase(&mut self.state, &kind)?;
        self.refresh_achievements();
        Ok(receipt)
    }

    /// Prestige: reset progress for a permanent multiplier bonus.
    pub fn prestige(&mut self) -> Result<PrestigeReceipt, EngineError> {
        let receipt = logic::prestige(&mut self.state)?;
        self.push_event(EngineEvent::Prestiged {
            level: receipt.level,
        });
        self.refresh_achievements();
        Ok(receipt)
    }

    /// Price of the next unit of the upgrade with this id.
    pub fn cost(&self, id: &str) -> Result<f64, EngineError> {
        let kind = self.resolve(id)?;
        Ok(logic::cost(&kind, self.state.owned(&kind)))
    }

    /// Every achievement id ever unlocked this session. Grows
    /// monotonically; ids are never removed, even when the predicate
    /// that earned them no longer holds.
    pub fn unlocked_achievements(&self) -> &BTreeSet<&'static str> {
        &self.unlocked
    }

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    fn resolve(&self, id: &str) -> Result<UpgradeKind, EngineError> {
        UpgradeKind::from_id(id).ok_or_else(|| EngineError::UnknownUpgrade { id: id.to_string() })
    }

    fn push_event(&mut self, event: EngineEvent) {
        self.events.push(event);
        if self.events.len() > MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
    }

    /// Union the currently-true predicates into the unlocked set.
    fn refresh_achievements(&mut self) {
        let newly: Vec<&'static str> = achievements::evaluate(&self.state)
            .filter(|id| !self.unlocked.contains(id))
            .collect();
        for id in newly {
            self.unlocked.insert(id);
            if let Some(entry) = achievements::by_id(id) {
                self.state
                    .add_log(&format!("🏆 実績解除！「{}」", entry.name), true);
            }
            self.push_event(EngineEvent::AchievementUnlocked { id });
        }
    }
}
