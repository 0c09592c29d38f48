//! The track: cells and the fixed board layout.
//!
//! Cells are immutable once the board is generated. Special cells sit at
//! the same positions every game:
//!
//! - Ladders: 4→22, 16→44, 32→88
//! - Snakes: 25→5, 57→33, 99→12
//! - Traps: 11, 41, 71
//! - Boosts: 21, 51, 81

pub mod cell;
pub mod layout;

pub use cell::{Cell, CellKind};
pub use layout::{generate_board, Board};
