//! Turn resolution.
//!
//! `resolve_roll` moves one player by one roll:
//!
//! 1. `target = from + roll`
//! 2. `target >= board_size` wins outright; the cell at the target is
//!    never consulted
//! 3. Ladders and snakes jump to their destination
//! 4. Traps and boosts pause the move in a `PendingChallenge`; the
//!    player stays put until the answer comes in
//! 5. Anything else is a plain step
//!
//! `resolve_answer` finishes a paused move:
//!
//! | Cell  | Right answer        | Wrong answer                  |
//! |-------|---------------------|-------------------------------|
//! | Trap  | `landed`            | `max(1, landed - penalty)`    |
//! | Boost | `landed + bonus`    | `landed`                      |
//!
//! The boost bonus is a direct assignment: the new cell's effect is not
//! applied and it does not count as a win.

use serde::{Deserialize, Serialize};

use super::challenge::{ChallengeKind, PendingChallenge};
use crate::board::{Board, CellKind};
use crate::core::{GameConfig, PlayerId, START_POSITION};

/// Result of resolving one roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Reached or passed the last cell.
    Won { from: u16, to: u16 },
    /// Landed on a normal cell.
    Stepped { from: u16, to: u16 },
    /// Landed on a ladder and climbed it.
    Ladder { from: u16, landed: u16, to: u16 },
    /// Landed on a snake and slid down it.
    Snake { from: u16, landed: u16, to: u16 },
    /// Landed on a trap or boost; the move waits on an answer.
    Challenge(PendingChallenge),
}

impl MoveOutcome {
    /// The mover's position after this outcome, if it moved them.
    #[must_use]
    pub fn position(&self) -> Option<u16> {
        match self {
            MoveOutcome::Won { to, .. }
            | MoveOutcome::Stepped { to, .. }
            | MoveOutcome::Ladder { to, .. }
            | MoveOutcome::Snake { to, .. } => Some(*to),
            MoveOutcome::Challenge(_) => None,
        }
    }

    /// Whether the turn passes to the next player right away.
    #[must_use]
    pub fn passes_turn(&self) -> bool {
        matches!(
            self,
            MoveOutcome::Stepped { .. } | MoveOutcome::Ladder { .. } | MoveOutcome::Snake { .. }
        )
    }
}

/// Result of answering a challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub player: PlayerId,
    pub kind: ChallengeKind,
    pub correct: bool,
    /// The trap or boost cell.
    pub landed: u16,
    /// Where the player ends up.
    pub position: u16,
}

/// Resolve `player` rolling `roll` from cell `from`.
pub fn resolve_roll(
    board: &Board,
    config: &GameConfig,
    player: PlayerId,
    from: u16,
    roll: u8,
) -> MoveOutcome {
    let target = from.saturating_add(u16::from(roll));

    if target >= config.board_size {
        return MoveOutcome::Won {
            from,
            to: config.board_size,
        };
    }

    let Some(cell) = board.get(target) else {
        return MoveOutcome::Stepped { from, to: target };
    };

    match (cell.kind, cell.jump()) {
        (CellKind::Ladder, Some(to)) => MoveOutcome::Ladder {
            from,
            landed: target,
            to,
        },
        (CellKind::Snake, Some(to)) => MoveOutcome::Snake {
            from,
            landed: target,
            to,
        },
        (kind, _) => match kind.challenge() {
            Some(challenge) => {
                MoveOutcome::Challenge(PendingChallenge::new(challenge, player, target))
            }
            None => MoveOutcome::Stepped { from, to: target },
        },
    }
}

/// Finish a paused move with the given answer.
pub fn resolve_answer(
    challenge: &PendingChallenge,
    candidate: &str,
    config: &GameConfig,
) -> AnswerOutcome {
    let correct = challenge.is_correct(candidate);
    let landed = challenge.resume.landed;

    let position = match (challenge.kind, correct) {
        (ChallengeKind::Trap, true) => landed,
        (ChallengeKind::Trap, false) => landed
            .saturating_sub(config.trap_penalty)
            .max(START_POSITION),
        // Never past the last cell
        (ChallengeKind::Boost, true) => landed
            .saturating_add(config.boost_bonus)
            .min(config.board_size),
        (ChallengeKind::Boost, false) => landed,
    };

    AnswerOutcome {
        player: challenge.resume.player,
        kind: challenge.kind,
        correct,
        landed,
        position,
    }
}

/// Seat after `current`, wrapping around.
#[must_use]
pub fn next_player_index(current: usize, player_count: usize) -> usize {
    if player_count == 0 {
        return 0;
    }
    (current + 1) % player_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::generate_board;
    use crate::board::layout::{BOOSTS, LADDERS, SNAKES, TRAPS};
    use proptest::prelude::*;

    const P0: PlayerId = PlayerId::new(0);

    fn roll(from: u16, value: u8) -> MoveOutcome {
        resolve_roll(&generate_board(), &GameConfig::default(), P0, from, value)
    }

    #[test]
    fn test_plain_step() {
        assert_eq!(roll(1, 1), MoveOutcome::Stepped { from: 1, to: 2 });
        assert!(roll(1, 1).passes_turn());
    }

    #[test]
    fn test_every_ladder_and_snake() {
        for (cell, to) in LADDERS {
            assert_eq!(
                roll(cell - 1, 1),
                MoveOutcome::Ladder { from: cell - 1, landed: cell, to }
            );
        }
        for (cell, to) in SNAKES {
            assert_eq!(
                roll(cell - 2, 2),
                MoveOutcome::Snake { from: cell - 2, landed: cell, to }
            );
        }
    }

    #[test]
    fn test_snake_at_99_is_not_a_win() {
        assert_eq!(
            roll(94, 5),
            MoveOutcome::Snake { from: 94, landed: 99, to: 12 }
        );
    }

    #[test]
    fn test_traps_and_boosts_open_challenges() {
        for cell in TRAPS {
            match roll(cell - 3, 3) {
                MoveOutcome::Challenge(c) => {
                    assert_eq!(c.kind, ChallengeKind::Trap);
                    assert_eq!(c.prompt, "2 + 2 = ?");
                    assert_eq!(c.resume.landed, cell);
                }
                other => panic!("expected trap challenge, got {other:?}"),
            }
        }
        for cell in BOOSTS {
            let outcome = roll(cell - 1, 1);
            assert!(!outcome.passes_turn());
            assert_eq!(outcome.position(), None);
            match outcome {
                MoveOutcome::Challenge(c) => assert_eq!(c.kind, ChallengeKind::Boost),
                other => panic!("expected boost challenge, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_exact_win() {
        let outcome = roll(94, 6);
        assert_eq!(outcome, MoveOutcome::Won { from: 94, to: 100 });
        assert!(!outcome.passes_turn());
    }

    #[test]
    fn test_answer_table() {
        let config = GameConfig::default();
        let trap = PendingChallenge::new(ChallengeKind::Trap, P0, 41);
        let boost = PendingChallenge::new(ChallengeKind::Boost, P0, 81);

        assert_eq!(resolve_answer(&trap, "4", &config).position, 41);
        assert_eq!(resolve_answer(&trap, "5", &config).position, 36);
        assert_eq!(resolve_answer(&boost, "4", &config).position, 86);
        assert_eq!(resolve_answer(&boost, "5", &config).position, 81);

        let outcome = resolve_answer(&trap, "4", &config);
        assert!(outcome.correct);
        assert_eq!(outcome.kind, ChallengeKind::Trap);
        assert_eq!(outcome.landed, 41);
    }

    #[test]
    fn test_trap_penalty_floors_at_start() {
        let config = GameConfig::default().with_quiz_stakes(20, 5);
        let trap = PendingChallenge::new(ChallengeKind::Trap, P0, 11);
        assert_eq!(resolve_answer(&trap, "nope", &config).position, 1);
    }

    #[test]
    fn test_boost_bonus_stays_on_board() {
        let config = GameConfig::default().with_quiz_stakes(5, 50);
        let boost = PendingChallenge::new(ChallengeKind::Boost, P0, 81);
        assert_eq!(resolve_answer(&boost, "4", &config).position, 100);
    }

    #[test]
    fn test_next_player_index() {
        assert_eq!(next_player_index(0, 3), 1);
        assert_eq!(next_player_index(2, 3), 0);
        assert_eq!(next_player_index(0, 0), 0);
    }

    proptest! {
        #[test]
        fn prop_reaching_the_end_always_wins(from in 94u16..100, value in 1u8..=6) {
            prop_assume!(from + u16::from(value) >= 100);
            prop_assert_eq!(roll(from, value), MoveOutcome::Won { from, to: 100 });
        }

        #[test]
        fn prop_landing_cell_decides_outcome(from in 1u16..100, value in 1u8..=6) {
            let target = from + u16::from(value);
            prop_assume!(target < 100);

            let board = generate_board();
            let cell = board.get(target).copied().unwrap();
            let outcome = roll(from, value);

            match cell.kind {
                CellKind::Ladder | CellKind::Snake => {
                    prop_assert_eq!(outcome.position(), cell.destination);
                    prop_assert!(outcome.passes_turn());
                }
                CellKind::Trap | CellKind::Boost => {
                    prop_assert_eq!(outcome.position(), None);
                    prop_assert!(!outcome.passes_turn());
                }
                CellKind::Normal => {
                    prop_assert_eq!(outcome, MoveOutcome::Stepped { from, to: target });
                }
            }
        }

        #[test]
        fn prop_wrong_trap_answer_penalizes(cell in 1u16..100, answer in ".*") {
            prop_assume!(answer != "4");
            let trap = PendingChallenge::new(ChallengeKind::Trap, P0, cell);
            let outcome = resolve_answer(&trap, &answer, &GameConfig::default());
            prop_assert!(!outcome.correct);
            prop_assert_eq!(outcome.position, cell.saturating_sub(5).max(1));
        }

        #[test]
        fn prop_wrong_boost_answer_stays(cell in 1u16..95, answer in ".*") {
            prop_assume!(answer != "4");
            let boost = PendingChallenge::new(ChallengeKind::Boost, P0, cell);
            let outcome = resolve_answer(&boost, &answer, &GameConfig::default());
            prop_assert_eq!(outcome.position, cell);
        }

        #[test]
        fn prop_turn_order_cycles(count in 1usize..=8, start in 0usize..8) {
            let start = start % count;
            let mut index = start;
            for _ in 0..count {
                index = next_player_index(index, count);
                prop_assert!(index < count);
            }
            prop_assert_eq!(index, start);
        }
    }
}
