//! Players and the player registry.
//!
//! ## PlayerId
//!
//! 0-based seat index. Display names are 1-based: seat 0 is
//! `player1` / "Player 1" / "P1".
//!
//! ## Roster
//!
//! The ordered participants of one session. Sessions hold 2-4 players,
//! so the roster lives inline in a `SmallVec`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::config::GameConfig;
use crate::error::{GameError, GameResult};

/// Cell every player starts on.
pub const START_POSITION: u16 = 1;

/// Ordered players of a session.
pub type Roster = SmallVec<[Player; 4]>;

/// Player seat, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based number used in every display name.
    #[must_use]
    pub const fn number(self) -> u16 {
        self.0 as u16 + 1
    }

    /// Stable key, e.g. `player1`.
    #[must_use]
    pub fn key(self) -> String {
        format!("player{}", self.number())
    }

    /// Display label, e.g. `Player 1`.
    #[must_use]
    pub fn label(self) -> String {
        format!("Player {}", self.number())
    }

    /// Short board token, e.g. `P1`.
    #[must_use]
    pub fn token(self) -> String {
        format!("P{}", self.number())
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use ai_ladder::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(usize::from(u8::MAX)) as u8).map(PlayerId)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Token color, written `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0x00);

    const PALETTE: [Color; 4] = [Color::BLUE, Color::RED, Color::GREEN, Color::YELLOW];

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pre-filled colors for a setup screen with `count` seats.
    ///
    /// Blue, red, green, yellow, then cycling.
    #[must_use]
    pub fn default_palette(count: usize) -> Vec<Color> {
        Self::PALETTE.iter().copied().cycle().take(count).collect()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| GameError::invalid_setup(format!("color '{s}' is not #rrggbb")))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| GameError::invalid_setup(format!("color '{s}' is not #rrggbb")))
        };

        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// A participant and their token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub label: String,
    pub color: Color,
    /// Current cell, always within `1..=board_size`.
    pub position: u16,
}

impl Player {
    /// Create a player on the start cell.
    pub fn new(id: PlayerId, color: Color) -> Self {
        Self {
            id,
            label: id.label(),
            color,
            position: START_POSITION,
        }
    }
}

/// Build the roster for a new session.
///
/// One player per color, in order, all on the start cell. The count must
/// be within the configured bounds and must match the number of colors.
pub fn initialize_players(
    config: &GameConfig,
    player_count: usize,
    colors: &[Color],
) -> GameResult<Roster> {
    if !(config.min_players..=config.max_players).contains(&player_count) {
        return Err(GameError::invalid_setup(format!(
            "player count {} outside {}..={}",
            player_count, config.min_players, config.max_players
        )));
    }
    if colors.len() != player_count {
        return Err(GameError::invalid_setup(format!(
            "{} players but {} colors",
            player_count,
            colors.len()
        )));
    }

    Ok(PlayerId::all(player_count)
        .zip(colors.iter().copied())
        .map(|(id, color)| Player::new(id, color))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_names() {
        let p0 = PlayerId::new(0);
        let p3 = PlayerId::new(3);

        assert_eq!(p0.index(), 0);
        assert_eq!(p0.key(), "player1");
        assert_eq!(p0.label(), "Player 1");
        assert_eq!(p3.token(), "P4");
        assert_eq!(format!("{}", p3), "player4");
    }

    #[test]
    fn test_color_parse_and_display() {
        let color: Color = "#0000FF".parse().unwrap();
        assert_eq!(color, Color::BLUE);
        assert_eq!(color.to_string(), "#0000ff");

        let color: Color = "#1a2b3c".parse().unwrap();
        assert_eq!(color, Color::rgb(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn test_color_parse_rejects_malformed() {
        for bad in ["0000ff", "#12345", "#1234567", "#gg0000", "", "#ééé"] {
            assert!(
                matches!(bad.parse::<Color>(), Err(GameError::InvalidSetup { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_default_palette() {
        assert_eq!(
            Color::default_palette(4),
            vec![Color::BLUE, Color::RED, Color::GREEN, Color::YELLOW]
        );
        assert_eq!(Color::default_palette(2), vec![Color::BLUE, Color::RED]);
        assert_eq!(Color::default_palette(5)[4], Color::BLUE);
    }

    #[test]
    fn test_initialize_players() {
        let config = GameConfig::default();
        let colors = Color::default_palette(3);
        let roster = initialize_players(&config, 3, &colors).unwrap();

        assert_eq!(roster.len(), 3);
        for (i, player) in roster.iter().enumerate() {
            assert_eq!(player.id, PlayerId::new(i as u8));
            assert_eq!(player.label, format!("Player {}", i + 1));
            assert_eq!(player.color, colors[i]);
            assert_eq!(player.position, START_POSITION);
        }
    }

    #[test]
    fn test_initialize_players_rejects_mismatch() {
        let config = GameConfig::default();
        let result = initialize_players(&config, 3, &Color::default_palette(2));
        assert!(matches!(result, Err(GameError::InvalidSetup { .. })));
    }

    #[test]
    fn test_initialize_players_rejects_count() {
        let config = GameConfig::default();
        assert!(initialize_players(&config, 1, &Color::default_palette(1)).is_err());
        assert!(initialize_players(&config, 5, &Color::default_palette(5)).is_err());
        assert!(initialize_players(&config, 2, &Color::default_palette(2)).is_ok());
        assert!(initialize_players(&config, 4, &Color::default_palette(4)).is_ok());
    }
}
