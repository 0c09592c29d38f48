//! Read-only views of a session.
//!
//! A `Snapshot` is an owned copy of everything a presentation layer
//! renders. The expected answer of a pending challenge is deliberately
//! left out of it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::game::Phase;
use crate::board::Cell;
use crate::core::{Player, PlayerId};
use crate::rules::{ChallengeKind, PendingChallenge};

/// What a history entry recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    Step,
    Ladder,
    Snake,
    /// Landed on a trap or boost; the position is unchanged until answered.
    ChallengeOpened { kind: ChallengeKind, landed: u16 },
    ChallengeAnswered { kind: ChallengeKind, correct: bool },
    Won,
}

/// One entry of the turn history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number the entry belongs to (starts at 1).
    pub turn: u32,
    pub player: PlayerId,
    /// The roll, for entries produced by a roll.
    pub roll: Option<u8>,
    pub from: u16,
    pub to: u16,
    pub event: TurnEvent,
}

/// A pending challenge as shown to players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeView {
    pub kind: ChallengeKind,
    pub header: String,
    pub prompt: String,
    pub player: PlayerId,
}

impl From<&PendingChallenge> for ChallengeView {
    fn from(challenge: &PendingChallenge) -> Self {
        Self {
            kind: challenge.kind,
            header: challenge.kind.header().to_string(),
            prompt: challenge.prompt.clone(),
            player: challenge.resume.player,
        }
    }
}

/// Observable state after an operation.
///
/// Board and players are empty during setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub cells: Vec<Cell>,
    pub players: Vec<Player>,
    pub active_player: usize,
    pub last_roll: u8,
    pub challenge: Option<ChallengeView>,
    pub winner: Option<PlayerId>,
    pub turn_number: u32,
    pub history: Vector<TurnRecord>,
}

impl Snapshot {
    /// The player whose turn it is, if a game is running.
    #[must_use]
    pub fn active(&self) -> Option<&Player> {
        self.players.get(self.active_player)
    }

    /// e.g. "P2's Turn"; `None` once there is a winner or before the game.
    #[must_use]
    pub fn turn_label(&self) -> Option<String> {
        if self.winner.is_some() {
            return None;
        }
        self.active().map(|p| format!("{}'s Turn", p.id.token()))
    }

    /// e.g. "Player 1 Wins!".
    #[must_use]
    pub fn winner_banner(&self) -> Option<String> {
        self.winner.map(|id| format!("{} Wins!", id.label()))
    }

    /// Players standing on cell `number`.
    pub fn players_on(&self, number: u16) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.position == number)
    }
}
