//! Pre-game setup.
//!
//! The lobby owns everything that exists before a session starts: the roster
//! and the pair-count knob. Starting a game produces a fresh [`Session`];
//! play-again just starts another one, and back-to-setup is dropping the
//! session. A running session holds its own copy of the players, so roster
//! edits here never reach a game already in progress.

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::player::{Player, Roster};
use crate::core::rng::GameRng;
use crate::deck::FacePool;
use crate::error::GameError;
use crate::session::Session;

/// Setup-phase state: roster and board size.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Lobby {
    roster: Roster,
    config: GameConfig,
}

impl Lobby {
    /// Lobby with the two default players and the default board size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player (next free palette color, name validated).
    pub fn add_player(&mut self, name: &str) -> Result<(), GameError> {
        self.roster.add(name)
    }

    /// Remove the player at `index` (fails at the two-player floor).
    pub fn remove_player(&mut self, index: usize) -> Result<Player, GameError> {
        self.roster.remove(index)
    }

    /// Set the number of pairs for the next game (4..=16, rejected outside).
    pub fn set_num_pairs(&mut self, num_pairs: usize) -> Result<(), GameError> {
        let delay = self.config.mismatch_delay_ms();
        self.config = GameConfig::new(num_pairs)?.with_mismatch_delay_ms(delay);
        Ok(())
    }

    /// Override the mismatch display delay for subsequent games.
    pub fn set_mismatch_delay_ms(&mut self, delay_ms: u64) {
        self.config = self.config.with_mismatch_delay_ms(delay_ms);
    }

    /// The current roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The configuration the next game will use.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Start a game: build a deck from `pool` and deal a fresh session.
    ///
    /// Scores start at zero and player 0 moves first. Call again for
    /// play-again; each call deals a new board.
    #[must_use]
    pub fn start_game(&self, pool: &FacePool, rng: &mut GameRng) -> Session {
        tracing::debug!(
            players = self.roster.len(),
            pairs = self.config.num_pairs(),
            custom_faces = pool.len(),
            "starting game"
        );
        Session::new(self.config, &self.roster, pool, rng)
    }
}
