//! Players and the pre-game roster.
//!
//! ## Player
//!
//! A named participant with a score counter and a display color.
//!
//! ## Roster
//!
//! Ordered list of 2-4 players. Size bounds and name validation are enforced
//! here with explicit errors; the presentation layer never needs to clamp.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Minimum roster size.
pub const MIN_PLAYERS: usize = 2;

/// Maximum roster size.
pub const MAX_PLAYERS: usize = 4;

/// Maximum player name length (characters, after trimming).
pub const MAX_NAME_LEN: usize = 15;

/// Display color, assigned from a fixed palette by roster position.
///
/// Opaque to the engine; the presentation layer maps it to real colors
/// via [`ColorTag::hex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorTag {
    Blue,
    Red,
    Green,
    Orange,
}

/// The fixed 4-color palette, indexed by roster position at add time.
pub const PALETTE: [ColorTag; MAX_PLAYERS] =
    [ColorTag::Blue, ColorTag::Red, ColorTag::Green, ColorTag::Orange];

impl ColorTag {
    /// Hex color for display.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            ColorTag::Blue => "#3498db",
            ColorTag::Red => "#e74c3c",
            ColorTag::Green => "#27ae60",
            ColorTag::Orange => "#f39c12",
        }
    }
}

/// A game participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
    color: ColorTag,
}

impl Player {
    fn new(name: String, color: ColorTag) -> Self {
        Self { name, score: 0, color }
    }

    /// Player name (1..=15 characters).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pairs claimed this game.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Display color.
    #[must_use]
    pub fn color(&self) -> ColorTag {
        self.color
    }

    pub(crate) fn add_point(&mut self) {
        self.score += 1;
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}

/// Ordered list of 2-4 players.
///
/// Mutation only exists pre-game: a running session copies the roster and
/// never hands back a mutable path to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Create a roster seeded with the two default players.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: vec![
                Player::new("Player 1".to_string(), PALETTE[0]),
                Player::new("Player 2".to_string(), PALETTE[1]),
            ],
        }
    }

    /// Add a player with the next palette color.
    ///
    /// Fails if the roster is full or the trimmed name is empty or longer
    /// than [`MAX_NAME_LEN`]. The roster is unchanged on failure.
    pub fn add(&mut self, name: &str) -> Result<(), GameError> {
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::RosterFull);
        }

        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
            return Err(GameError::InvalidPlayerName);
        }

        let color = PALETTE[self.players.len()];
        self.players.push(Player::new(name.to_string(), color));
        Ok(())
    }

    /// Remove the player at `index`.
    ///
    /// Fails at the [`MIN_PLAYERS`] floor or for an out-of-range index.
    /// The roster is unchanged on failure.
    pub fn remove(&mut self, index: usize) -> Result<Player, GameError> {
        if self.players.len() <= MIN_PLAYERS {
            return Err(GameError::RosterAtMinimum);
        }
        if index >= self.players.len() {
            return Err(GameError::PlayerIndexOutOfRange { index, len: self.players.len() });
        }

        Ok(self.players.remove(index))
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false - the roster never drops below two players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get a player by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Iterate over players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Copy the players with scores reset to zero (new game start).
    #[must_use]
    pub(crate) fn fresh_players(&self) -> Vec<Player> {
        let mut players = self.players.clone();
        for player in &mut players {
            player.reset_score();
        }
        players
    }
}
