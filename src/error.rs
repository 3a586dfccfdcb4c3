//! Boundary error taxonomy.
//!
//! Configuration and roster violations are rejected with an explicit error
//! rather than clamped, so tests can observe them. Invalid flips are NOT
//! errors - see [`crate::session::FlipOutcome::Rejected`].

use thiserror::Error;

use crate::core::config::{MAX_PAIRS, MIN_PAIRS};
use crate::core::player::{MAX_NAME_LEN, MAX_PLAYERS, MIN_PLAYERS};

/// Setup-time rule violations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Pair count outside the supported board sizes.
    #[error("pair count {0} outside supported range {MIN_PAIRS}..={MAX_PAIRS}")]
    PairCountOutOfRange(usize),

    /// Roster already holds the maximum number of players.
    #[error("roster already has {MAX_PLAYERS} players")]
    RosterFull,

    /// Roster is at the minimum size and cannot shrink further.
    #[error("roster cannot drop below {MIN_PLAYERS} players")]
    RosterAtMinimum,

    /// Player name is empty (after trimming) or too long.
    #[error("player name must be 1..={MAX_NAME_LEN} characters after trimming")]
    InvalidPlayerName,

    /// Player index does not exist in the roster.
    #[error("player index {index} out of range for roster of {len}")]
    PlayerIndexOutOfRange { index: usize, len: usize },
}
