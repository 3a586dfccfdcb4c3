//! Core primitives: players, configuration, deterministic RNG.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_MISMATCH_DELAY_MS, DEFAULT_PAIRS, MAX_PAIRS, MIN_PAIRS};
pub use player::{ColorTag, Player, Roster, MAX_NAME_LEN, MAX_PLAYERS, MIN_PLAYERS, PALETTE};
pub use rng::{GameRng, GameRngState};
