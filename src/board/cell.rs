//! Board cells.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules::ChallengeKind;

/// What happens when a player lands on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Normal,
    /// Jump forward to the destination.
    Ladder,
    /// Slide back to the destination.
    Snake,
    /// Question; a wrong answer costs cells.
    Trap,
    /// Question; a right answer gains cells.
    Boost,
}

impl CellKind {
    /// The challenge a cell of this kind opens, if any.
    #[must_use]
    pub fn challenge(self) -> Option<ChallengeKind> {
        match self {
            CellKind::Trap => Some(ChallengeKind::Trap),
            CellKind::Boost => Some(ChallengeKind::Boost),
            _ => None,
        }
    }
}

/// One numbered square of the track.
///
/// `destination` is set for ladders and snakes only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub number: u16,
    pub kind: CellKind,
    pub destination: Option<u16>,
}

impl Cell {
    #[must_use]
    pub const fn normal(number: u16) -> Self {
        Self {
            number,
            kind: CellKind::Normal,
            destination: None,
        }
    }

    /// A ladder always leads forward.
    #[must_use]
    pub fn ladder(number: u16, to: u16) -> Self {
        debug_assert!(to > number, "ladder {number}→{to} must lead forward");
        Self {
            number,
            kind: CellKind::Ladder,
            destination: Some(to),
        }
    }

    /// A snake always leads back.
    #[must_use]
    pub fn snake(number: u16, to: u16) -> Self {
        debug_assert!(to < number, "snake {number}→{to} must lead back");
        Self {
            number,
            kind: CellKind::Snake,
            destination: Some(to),
        }
    }

    #[must_use]
    pub const fn trap(number: u16) -> Self {
        Self {
            number,
            kind: CellKind::Trap,
            destination: None,
        }
    }

    #[must_use]
    pub const fn boost(number: u16) -> Self {
        Self {
            number,
            kind: CellKind::Boost,
            destination: None,
        }
    }

    /// Destination of a ladder or snake.
    #[must_use]
    pub fn jump(&self) -> Option<u16> {
        match self.kind {
            CellKind::Ladder | CellKind::Snake => self.destination,
            _ => None,
        }
    }

    #[must_use]
    pub fn is_special(&self) -> bool {
        self.kind != CellKind::Normal
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.jump() {
            Some(to) => write!(f, "{} → {}", self.number, to),
            None => write!(f, "{}", self.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Cell::normal(7).kind, CellKind::Normal);
        assert_eq!(Cell::ladder(4, 22).jump(), Some(22));
        assert_eq!(Cell::snake(25, 5).jump(), Some(5));
        assert_eq!(Cell::trap(11).jump(), None);
        assert!(!Cell::normal(7).is_special());
        assert!(Cell::boost(21).is_special());
    }

    #[test]
    fn test_challenge_kinds() {
        assert_eq!(CellKind::Trap.challenge(), Some(ChallengeKind::Trap));
        assert_eq!(CellKind::Boost.challenge(), Some(ChallengeKind::Boost));
        assert_eq!(CellKind::Ladder.challenge(), None);
        assert_eq!(CellKind::Normal.challenge(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::ladder(4, 22).to_string(), "4 → 22");
        assert_eq!(Cell::snake(99, 12).to_string(), "99 → 12");
        assert_eq!(Cell::trap(11).to_string(), "11");
    }
}
