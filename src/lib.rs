//! # memory-match
//!
//! A turn-based memory-matching game engine with pluggable image storage.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: one [`Session`] value owns all game state; every
//!    transition is a plain method call returning an observable outcome.
//!
//! 2. **Deterministic**: deck construction takes a seeded [`GameRng`], and
//!    the mismatch delay is a deadline against a caller-supplied clock, so
//!    whole games replay exactly in tests.
//!
//! 3. **Isolated collaborators**: the image store and account service sit
//!    behind traits. Their failures degrade to the built-in symbolic faces
//!    and can never corrupt or stall a game.
//!
//! ## Modules
//!
//! - `core`: players and roster, configuration, RNG
//! - `deck`: face values, cards, deck construction
//! - `session`: the move-resolver state machine, scoring, winners
//! - `lobby`: pre-game setup and game start
//! - `store`: image persistence contract and in-memory implementation
//! - `account`: authentication state contract and error mapping
//! - `images`: the user's custom image collection
//! - `error`: boundary error taxonomy
//!
//! ## Example
//!
//! ```
//! use memory_match::{FacePool, FlipOutcome, GameRng, Lobby};
//!
//! let mut lobby = Lobby::new();
//! lobby.add_player("Carol").unwrap();
//! lobby.set_num_pairs(4).unwrap();
//!
//! let mut rng = GameRng::new(42);
//! let mut session = lobby.start_game(&FacePool::empty(), &mut rng);
//!
//! match session.apply_flip(0, 0) {
//!     FlipOutcome::Flipped => {}
//!     outcome => panic!("unexpected: {outcome:?}"),
//! }
//! ```

pub mod account;
pub mod core;
pub mod deck;
pub mod error;
pub mod images;
pub mod lobby;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    ColorTag, GameConfig, GameRng, GameRngState, Player, Roster,
    DEFAULT_MISMATCH_DELAY_MS, DEFAULT_PAIRS, MAX_NAME_LEN, MAX_PAIRS, MAX_PLAYERS, MIN_PAIRS,
    MIN_PLAYERS, PALETTE,
};

pub use crate::deck::{build_deck, Card, CardId, FacePool, FaceValue, SYMBOLIC_FACES};

pub use crate::session::{winners_by_score, FlipOutcome, Session, Status};

pub use crate::lobby::Lobby;

pub use crate::store::{ImageStore, MemoryImageStore, StoreError, UserId};

pub use crate::account::{AccountService, AuthError, AuthState, StaticAccounts};

pub use crate::images::ImageLibrary;

pub use crate::error::GameError;
