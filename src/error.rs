//! Error types for engine transitions.

use std::fmt;

/// Errors surfaced by `purchase`, `prestige` and `cost`.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// The resource precondition of a purchase or prestige was not met.
    /// The transition was rejected and state is unchanged.
    InsufficientFunds {
        /// Energy the transition required.
        cost: f64,
        /// Energy actually available.
        energy: f64,
    },
    /// An upgrade id absent from the catalog was passed in. A caller
    /// bug, distinct from a rejected transition.
    UnknownUpgrade {
        /// The offending id.
        id: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientFunds { cost, energy } => {
                write!(f, "insufficient energy: need {cost}, have {energy}")
            }
            Self::UnknownUpgrade { id } => {
                write!(f, "unknown upgrade id: {id:?}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
