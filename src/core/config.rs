//! Game configuration parameters.
//!
//! The special-cell layout is fixed; only the numeric rules around it
//! (board length, die size, player bounds, quiz penalties) are tunable.

use serde::{Deserialize, Serialize};

use crate::board::layout::HIGHEST_SPECIAL_CELL;
use crate::error::{GameError, GameResult};

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cells on the track (default: 100).
    /// Reaching or passing this cell wins the game.
    pub board_size: u16,

    /// Faces on the die (default: 6). Rolls are uniform in `1..=die_faces`.
    pub die_faces: u8,

    /// Fewest players a session may start with (default: 2).
    pub min_players: usize,

    /// Most players a session may start with (default: 4).
    pub max_players: usize,

    /// Cells lost on a wrong trap answer (default: 5).
    /// The player never drops below cell 1.
    pub trap_penalty: u16,

    /// Cells gained on a right boost answer (default: 5).
    pub boost_bonus: u16,

    /// Seed for the dice. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 100,
            die_faces: 6,
            min_players: 2,
            max_players: 4,
            trap_penalty: 5,
            boost_bonus: 5,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new config with a fixed dice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom die size.
    pub fn with_die_faces(mut self, faces: u8) -> Self {
        self.die_faces = faces;
        self
    }

    /// Create a new config with custom player bounds.
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Create a new config with a custom board length.
    pub fn with_board_size(mut self, size: u16) -> Self {
        self.board_size = size;
        self
    }

    /// Create a new config with custom trap penalty and boost bonus.
    pub fn with_quiz_stakes(mut self, trap_penalty: u16, boost_bonus: u16) -> Self {
        self.trap_penalty = trap_penalty;
        self.boost_bonus = boost_bonus;
        self
    }

    /// Check that the parameters describe a playable game.
    pub fn validate(&self) -> GameResult<()> {
        if self.board_size <= HIGHEST_SPECIAL_CELL {
            return Err(GameError::invalid_config(format!(
                "board_size {} must exceed the highest special cell {}",
                self.board_size, HIGHEST_SPECIAL_CELL
            )));
        }
        if self.die_faces == 0 {
            return Err(GameError::invalid_config("die_faces must be at least 1"));
        }
        if self.min_players == 0 {
            return Err(GameError::invalid_config("min_players must be at least 1"));
        }
        if self.min_players > self.max_players {
            return Err(GameError::invalid_config(format!(
                "min_players {} exceeds max_players {}",
                self.min_players, self.max_players
            )));
        }
        if self.max_players > usize::from(u8::MAX) {
            return Err(GameError::invalid_config(format!(
                "max_players {} exceeds {}",
                self.max_players,
                u8::MAX
            )));
        }
        Ok(())
    }
}
