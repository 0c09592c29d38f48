//! Board generation.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Length of the standard track.
pub const DEFAULT_BOARD_SIZE: u16 = 100;

/// Ladders as `(from, to)`.
pub const LADDERS: [(u16, u16); 3] = [(4, 22), (16, 44), (32, 88)];

/// Snakes as `(from, to)`.
pub const SNAKES: [(u16, u16); 3] = [(25, 5), (57, 33), (99, 12)];

pub const TRAPS: [u16; 3] = [11, 41, 71];

pub const BOOSTS: [u16; 3] = [21, 51, 81];

/// Highest cell carrying a special effect. A board must be longer than
/// this or the effect would be unreachable.
pub const HIGHEST_SPECIAL_CELL: u16 = 99;

/// The ordered track, one cell per number starting at 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Build a track of `size` cells with the fixed special layout.
    ///
    /// Specials that would fall outside the track are left out.
    #[must_use]
    pub fn generate(size: u16) -> Self {
        let mut cells: Vec<Cell> = (1..=size).map(Cell::normal).collect();
        let in_range = |n: u16| (1..=size).contains(&n);

        for (from, to) in LADDERS {
            if in_range(from) && in_range(to) {
                cells[usize::from(from - 1)] = Cell::ladder(from, to);
            }
        }
        for (from, to) in SNAKES {
            if in_range(from) && in_range(to) {
                cells[usize::from(from - 1)] = Cell::snake(from, to);
            }
        }
        for n in TRAPS.into_iter().filter(|&n| in_range(n)) {
            cells[usize::from(n - 1)] = Cell::trap(n);
        }
        for n in BOOSTS.into_iter().filter(|&n| in_range(n)) {
            cells[usize::from(n - 1)] = Cell::boost(n);
        }

        Self { cells }
    }

    /// Get the cell with the given number (1-based).
    #[must_use]
    pub fn get(&self, number: u16) -> Option<&Cell> {
        let index = usize::from(number).checked_sub(1)?;
        self.cells.get(index)
    }

    /// Number of cells; also the last cell's number.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.cells.len() as u16
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the non-normal cells in track order.
    pub fn specials(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_special())
    }
}

/// Generate the standard 100-cell board.
#[must_use]
pub fn generate_board() -> Board {
    Board::generate(DEFAULT_BOARD_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellKind;

    #[test]
    fn test_board_has_one_cell_per_number() {
        let board = generate_board();
        assert_eq!(board.size(), 100);
        for (i, cell) in board.cells().iter().enumerate() {
            assert_eq!(usize::from(cell.number), i + 1);
        }
    }

    #[test]
    fn test_special_layout() {
        let board = generate_board();

        let kind_at = |n: u16| board.get(n).map(|c| c.kind);
        for n in [4, 16, 32] {
            assert_eq!(kind_at(n), Some(CellKind::Ladder));
        }
        for n in [25, 57, 99] {
            assert_eq!(kind_at(n), Some(CellKind::Snake));
        }
        for n in [11, 41, 71] {
            assert_eq!(kind_at(n), Some(CellKind::Trap));
        }
        for n in [21, 51, 81] {
            assert_eq!(kind_at(n), Some(CellKind::Boost));
        }

        assert_eq!(board.get(4).and_then(Cell::jump), Some(22));
        assert_eq!(board.get(32).and_then(Cell::jump), Some(88));
        assert_eq!(board.get(99).and_then(Cell::jump), Some(12));
        assert_eq!(board.specials().count(), 12);
    }

    #[test]
    fn test_jump_directions() {
        let board = generate_board();
        for cell in board.specials() {
            match (cell.kind, cell.destination) {
                (CellKind::Ladder, Some(to)) => assert!(to > cell.number),
                (CellKind::Snake, Some(to)) => assert!(to < cell.number),
                (CellKind::Trap | CellKind::Boost, None) => {}
                other => panic!("unexpected cell shape {other:?}"),
            }
        }
    }

    #[test]
    fn test_board_is_deterministic() {
        assert_eq!(generate_board(), generate_board());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = generate_board();
        assert!(board.get(0).is_none());
        assert!(board.get(101).is_none());
        assert!(Board::default().is_empty());
    }

    #[test]
    fn test_longer_board_keeps_layout() {
        let board = Board::generate(120);
        assert_eq!(board.size(), 120);
        assert_eq!(board.specials().count(), 12);
        assert_eq!(board.get(100).map(|c| c.kind), Some(CellKind::Normal));
    }
}
