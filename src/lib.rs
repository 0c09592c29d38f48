//! # ai-ladder
//!
//! Game-state engine for a snakes-and-ladders board game where some
//! cells stop the mover with a question.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering. A presentation layer calls the
//!    session operations and renders the `Snapshot` it gets back.
//!
//! 2. **Permissive Operations**: Rolling at the wrong moment is a no-op,
//!    not an error. Only broken preconditions (bad setup data, answering
//!    when nothing was asked) surface as `GameError`.
//!
//! 3. **Inspectable Pauses**: A move interrupted by a trap or boost is
//!    stored as plain data (`PendingChallenge`) instead of a callback, so
//!    the paused state can be serialized and examined.
//!
//! ## Modules
//!
//! - `core`: Configuration, dice RNG, players
//! - `board`: Cells and the fixed 100-cell layout
//! - `rules`: Move resolution and challenge resolution
//! - `session`: The `GameSession` state machine and its snapshots
//! - `error`: Error types

pub mod core;
pub mod board;
pub mod rules;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Color, GameConfig, GameRng, GameRngState, Player, PlayerId, Roster, START_POSITION,
};

pub use crate::board::{generate_board, Board, Cell, CellKind};

pub use crate::rules::{
    AnswerOutcome, ChallengeKind, MoveOutcome, PendingChallenge, ResumeContext,
};

pub use crate::session::{
    ChallengeView, DiceOutcome, GameSession, IgnoreReason, Phase, Snapshot, TurnEvent, TurnRecord,
};

pub use crate::error::{GameError, GameResult};
