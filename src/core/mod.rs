//! Core engine types: configuration, dice RNG, players.
//!
//! These are the building blocks the board, rules and session modules
//! are assembled from.

pub mod config;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use player::{initialize_players, Color, Player, PlayerId, Roster, START_POSITION};
pub use rng::{GameRng, GameRngState};
