//! Game configuration.
//!
//! The only externally configurable knobs: pair count (4..=16) and the
//! mismatch display delay. Violations are rejected, not clamped, so they
//! stay observable in tests; the setup UI is free to clamp before calling.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Minimum playable pair count.
pub const MIN_PAIRS: usize = 4;

/// Maximum pair count (board-size ceiling).
pub const MAX_PAIRS: usize = 16;

/// Default pair count at setup.
pub const DEFAULT_PAIRS: usize = 8;

/// How long a non-matching pair stays revealed before it auto-clears.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Validated session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    num_pairs: usize,
    mismatch_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_pairs: DEFAULT_PAIRS,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given pair count.
    pub fn new(num_pairs: usize) -> Result<Self, GameError> {
        if !(MIN_PAIRS..=MAX_PAIRS).contains(&num_pairs) {
            return Err(GameError::PairCountOutOfRange(num_pairs));
        }

        Ok(Self {
            num_pairs,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
        })
    }

    /// Override the mismatch display delay.
    #[must_use]
    pub fn with_mismatch_delay_ms(mut self, delay_ms: u64) -> Self {
        self.mismatch_delay_ms = delay_ms;
        self
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn num_pairs(&self) -> usize {
        self.num_pairs
    }

    /// Mismatch display delay in milliseconds.
    #[must_use]
    pub fn mismatch_delay_ms(&self) -> u64 {
        self.mismatch_delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        for pairs in MIN_PAIRS..=MAX_PAIRS {
            let config = GameConfig::new(pairs).unwrap();
            assert_eq!(config.num_pairs(), pairs);
            assert_eq!(config.mismatch_delay_ms(), DEFAULT_MISMATCH_DELAY_MS);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(GameConfig::new(3), Err(GameError::PairCountOutOfRange(3)));
        assert_eq!(GameConfig::new(17), Err(GameError::PairCountOutOfRange(17)));
        assert_eq!(GameConfig::new(0), Err(GameError::PairCountOutOfRange(0)));
    }

    #[test]
    fn test_default() {
        let config = GameConfig::default();
        assert_eq!(config.num_pairs(), DEFAULT_PAIRS);
    }

    #[test]
    fn test_delay_override() {
        let config = GameConfig::new(4).unwrap().with_mismatch_delay_ms(0);
        assert_eq!(config.mismatch_delay_ms(), 0);
    }
}
