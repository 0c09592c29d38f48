//! Error types for the engine.
//!
//! Most gameplay operations are permissive and never fail: a roll that
//! arrives at the wrong moment is ignored, not rejected. Errors are
//! reserved for broken preconditions a caller must fix (bad setup data,
//! answering when nothing was asked, invalid configuration).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::Phase;

/// Top-level error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    #[error("Invalid setup: {reason}")]
    InvalidSetup { reason: String },

    #[error("No challenge is pending")]
    NoPendingChallenge,

    #[error("Operation requires phase {expected:?}, session is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    pub fn invalid_setup(reason: impl Into<String>) -> Self {
        Self::InvalidSetup {
            reason: reason.into(),
        }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
