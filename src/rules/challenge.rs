//! Challenges: moves paused on a trap or boost cell.
//!
//! A challenge stores only what is needed to finish the move later: who
//! moved, where they landed, and which question was asked. Answers are
//! compared exactly (case-sensitive, no trimming).

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Which kind of cell opened the challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeKind {
    Trap,
    Boost,
}

impl ChallengeKind {
    /// Heading shown above the question.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            ChallengeKind::Trap => "Trap Cell!",
            ChallengeKind::Boost => "AI Boost!",
        }
    }

    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            ChallengeKind::Trap => "2 + 2 = ?",
            ChallengeKind::Boost => "What is 2 * 2?",
        }
    }

    /// Both questions share the answer "4".
    #[must_use]
    pub const fn expected_answer(self) -> &'static str {
        match self {
            ChallengeKind::Trap | ChallengeKind::Boost => "4",
        }
    }
}

/// Data needed to finish the paused move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeContext {
    pub player: PlayerId,
    /// The trap or boost cell the player landed on.
    pub landed: u16,
}

/// A move waiting on an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChallenge {
    pub kind: ChallengeKind,
    pub prompt: String,
    pub expected_answer: String,
    pub resume: ResumeContext,
}

impl PendingChallenge {
    /// Open the challenge for `player` landing on cell `landed`.
    pub fn new(kind: ChallengeKind, player: PlayerId, landed: u16) -> Self {
        Self {
            kind,
            prompt: kind.prompt().to_string(),
            expected_answer: kind.expected_answer().to_string(),
            resume: ResumeContext { player, landed },
        }
    }

    #[must_use]
    pub fn is_correct(&self, candidate: &str) -> bool {
        candidate == self.expected_answer
    }
}
