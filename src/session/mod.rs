//! The game session state machine.
//!
//! ```text
//! Setup --start_session--> Playing --win--> Finished
//!   ^                                          |
//!   +--------------- restart_session ----------+
//! ```
//!
//! `GameSession` owns the board, the roster, the dice and the pending
//! challenge. A presentation layer drives it with `start_session`,
//! `roll_dice`, `submit_answer` and `restart_session`, and renders the
//! `Snapshot` it reads back after each call.

pub mod game;
pub mod snapshot;

pub use game::{DiceOutcome, GameSession, IgnoreReason, Phase};
pub use snapshot::{ChallengeView, Snapshot, TurnEvent, TurnRecord};
