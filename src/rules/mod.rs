//! Move resolution.
//!
//! - `engine`: Resolves a roll against the board, and an answer against a
//!   paused move
//! - `challenge`: The paused-move value a trap or boost leaves behind
//!
//! Both are pure: they compute outcomes from positions and cells and
//! never touch session state. The session applies what they return.

pub mod challenge;
pub mod engine;

pub use challenge::{ChallengeKind, PendingChallenge, ResumeContext};
pub use engine::{next_player_index, resolve_answer, resolve_roll, AnswerOutcome, MoveOutcome};
