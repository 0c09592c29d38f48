//! The `GameSession` aggregate.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::snapshot::{ChallengeView, Snapshot, TurnEvent, TurnRecord};
use crate::board::Board;
use crate::core::{initialize_players, Color, GameConfig, GameRng, GameRngState, Player, PlayerId, Roster};
use crate::error::{GameError, GameResult};
use crate::rules::{
    next_player_index, resolve_answer, resolve_roll, AnswerOutcome, MoveOutcome, PendingChallenge,
};

/// Session lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for player count and colors.
    #[default]
    Setup,
    Playing,
    /// Someone won; only a restart is accepted.
    Finished,
}

/// Why a roll was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No game running (still in setup).
    NotPlaying,
    /// A challenge is waiting for an answer.
    ChallengePending,
    /// The game already has a winner.
    GameOver,
}

/// Result of a roll request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiceOutcome {
    Rolled {
        player: PlayerId,
        value: u8,
        outcome: MoveOutcome,
    },
    /// The roll was dropped without touching any state.
    Ignored(IgnoreReason),
}

/// One game, from setup to a winner.
///
/// All operations run to completion before returning. Rolling is
/// permissive: asking at the wrong moment returns
/// `DiceOutcome::Ignored` instead of an error.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    phase: Phase,
    board: Board,
    players: Roster,
    active_player: usize,
    last_roll: u8,
    pending: Option<PendingChallenge>,
    winner: Option<PlayerId>,
    turn_number: u32,
    history: Vector<TurnRecord>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::blank(GameConfig::default(), GameRng::from_entropy())
    }
}

impl GameSession {
    /// Create a session in setup.
    ///
    /// Dice are seeded from `config.seed`, or from entropy when unset.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self::blank(config, rng))
    }

    /// Create a session with the default rules and fixed dice.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::blank(GameConfig::default().with_seed(seed), GameRng::new(seed))
    }

    fn blank(config: GameConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            phase: Phase::Setup,
            board: Board::default(),
            players: Roster::new(),
            active_player: 0,
            last_roll: 1,
            pending: None,
            winner: None,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    // === Phase transitions ===

    /// Leave setup: generate the board and seat one player per color.
    pub fn start_session(&mut self, player_count: usize, colors: &[Color]) -> GameResult<()> {
        if self.phase != Phase::Setup {
            return Err(GameError::WrongPhase {
                expected: Phase::Setup,
                actual: self.phase,
            });
        }

        self.players = initialize_players(&self.config, player_count, colors)?;
        self.board = Board::generate(self.config.board_size);
        self.active_player = 0;
        self.last_roll = 1;
        self.pending = None;
        self.winner = None;
        self.turn_number = 1;
        self.history = Vector::new();
        self.phase = Phase::Playing;

        info!(player_count, seed = self.rng.seed(), "session started");
        Ok(())
    }

    /// Discard the game and go back to setup. Accepted in any phase.
    pub fn restart_session(&mut self) {
        info!(phase = ?self.phase, winner = ?self.winner, "session restarted");

        self.phase = Phase::Setup;
        self.board = Board::default();
        self.players.clear();
        self.active_player = 0;
        self.last_roll = 1;
        self.pending = None;
        self.winner = None;
        self.turn_number = 1;
        self.history = Vector::new();
    }

    // === Turn operations ===

    /// Roll the die for the active player and resolve the move.
    ///
    /// Ignored unless a game is running with no winner and no pending
    /// challenge.
    pub fn roll_dice(&mut self) -> DiceOutcome {
        if let Some(reason) = self.roll_blocked() {
            debug!(?reason, "roll ignored");
            return DiceOutcome::Ignored(reason);
        }
        let value = self.rng.roll_die(self.config.die_faces);
        self.apply_roll(value)
    }

    /// Resolve a move with a chosen roll instead of the die.
    ///
    /// Same preconditions as `roll_dice`. The value is clamped into
    /// `1..=die_faces`.
    pub fn roll_with(&mut self, value: u8) -> DiceOutcome {
        if let Some(reason) = self.roll_blocked() {
            debug!(?reason, "roll ignored");
            return DiceOutcome::Ignored(reason);
        }
        self.apply_roll(value.clamp(1, self.config.die_faces.max(1)))
    }

    /// Answer the pending challenge and finish the paused move.
    pub fn submit_answer(&mut self, candidate: &str) -> GameResult<AnswerOutcome> {
        let challenge = self.pending.take().ok_or(GameError::NoPendingChallenge)?;
        let outcome = resolve_answer(&challenge, candidate, &self.config);

        self.set_position(outcome.player.index(), outcome.position);
        self.record(
            outcome.player,
            None,
            outcome.landed,
            outcome.position,
            TurnEvent::ChallengeAnswered {
                kind: outcome.kind,
                correct: outcome.correct,
            },
        );
        debug!(
            player = %outcome.player,
            kind = ?outcome.kind,
            correct = outcome.correct,
            position = outcome.position,
            "challenge answered"
        );

        self.advance_turn();
        Ok(outcome)
    }

    fn roll_blocked(&self) -> Option<IgnoreReason> {
        if self.winner.is_some() || self.phase == Phase::Finished {
            Some(IgnoreReason::GameOver)
        } else if self.phase != Phase::Playing || self.players.is_empty() {
            Some(IgnoreReason::NotPlaying)
        } else if self.pending.is_some() {
            Some(IgnoreReason::ChallengePending)
        } else {
            None
        }
    }

    fn apply_roll(&mut self, value: u8) -> DiceOutcome {
        let Some(mover) = self.players.get(self.active_player) else {
            return DiceOutcome::Ignored(IgnoreReason::NotPlaying);
        };
        let (player, from) = (mover.id, mover.position);

        self.last_roll = value;
        let outcome = resolve_roll(&self.board, &self.config, player, from, value);
        debug!(%player, roll = value, from, ?outcome, "roll resolved");

        match &outcome {
            MoveOutcome::Won { to, .. } => {
                self.set_position(self.active_player, *to);
                self.record(player, Some(value), from, *to, TurnEvent::Won);
                self.winner = Some(player);
                self.phase = Phase::Finished;
                info!(%player, turn = self.turn_number, "game won");
            }
            MoveOutcome::Stepped { to, .. } => {
                self.set_position(self.active_player, *to);
                self.record(player, Some(value), from, *to, TurnEvent::Step);
                self.advance_turn();
            }
            MoveOutcome::Ladder { to, .. } => {
                self.set_position(self.active_player, *to);
                self.record(player, Some(value), from, *to, TurnEvent::Ladder);
                self.advance_turn();
            }
            MoveOutcome::Snake { to, .. } => {
                self.set_position(self.active_player, *to);
                self.record(player, Some(value), from, *to, TurnEvent::Snake);
                self.advance_turn();
            }
            MoveOutcome::Challenge(challenge) => {
                let event = TurnEvent::ChallengeOpened {
                    kind: challenge.kind,
                    landed: challenge.resume.landed,
                };
                self.record(player, Some(value), from, from, event);
                self.pending = Some(challenge.clone());
            }
        }

        DiceOutcome::Rolled {
            player,
            value,
            outcome,
        }
    }

    fn set_position(&mut self, index: usize, position: u16) {
        if let Some(player) = self.players.get_mut(index) {
            player.position = position;
        }
    }

    fn advance_turn(&mut self) {
        self.active_player = next_player_index(self.active_player, self.players.len());
        self.turn_number += 1;
        trace!(active = self.active_player, turn = self.turn_number, "turn advanced");
    }

    fn record(&mut self, player: PlayerId, roll: Option<u8>, from: u16, to: u16, event: TurnEvent) {
        self.history.push_back(TurnRecord {
            turn: self.turn_number,
            player,
            roll,
            from,
            to,
            event,
        });
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Empty during setup.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn active_player_index(&self) -> usize {
        self.active_player
    }

    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.active_player)
    }

    /// Last rolled value; 1 before the first roll.
    #[must_use]
    pub fn last_roll(&self) -> u8 {
        self.last_roll
    }

    #[must_use]
    pub fn pending_challenge(&self) -> Option<&PendingChallenge> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Dice state, for checkpointing a seeded run.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Owned copy of everything a presentation layer renders.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            cells: self.board.cells().to_vec(),
            players: self.players.to_vec(),
            active_player: self.active_player,
            last_roll: self.last_roll,
            challenge: self.pending.as_ref().map(ChallengeView::from),
            winner: self.winner,
            turn_number: self.turn_number,
            history: self.history.clone(),
        }
    }
}
