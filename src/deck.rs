//! Card faces and deck construction.
//!
//! A deck is built once per session: select face values (custom images when
//! the user has enough, the built-in glyph prefix otherwise), duplicate each
//! into a pair, and deal a uniform random permutation. Cards never move
//! position after dealing; flip/match status lives in the session, not here.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::core::rng::GameRng;

/// Built-in symbolic faces, used whenever the custom pool is too small.
///
/// Selection always takes the leading prefix, so small boards get the same
/// glyphs every time.
pub const SYMBOLIC_FACES: [&str; 16] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼",
    "🦁", "🐮", "🐷", "🐸", "🐵", "🐔", "🐧", "🦉",
];

/// A card face: the matching key plus a rendering hint.
///
/// The variant tells the presentation layer whether to draw a glyph or fetch
/// an image; matching compares identifiers only, so equality and hashing
/// deliberately ignore the variant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum FaceValue {
    /// A glyph from the built-in set.
    Symbolic(String),
    /// A reference into the user's image store.
    ImageRef(String),
}

impl FaceValue {
    /// Create a symbolic face.
    pub fn symbolic(glyph: impl Into<String>) -> Self {
        Self::Symbolic(glyph.into())
    }

    /// Create an image-backed face.
    pub fn image(uri: impl Into<String>) -> Self {
        Self::ImageRef(uri.into())
    }

    /// The identifier cards are matched on.
    #[must_use]
    pub fn ident(&self) -> &str {
        match self {
            Self::Symbolic(s) | Self::ImageRef(s) => s,
        }
    }

    /// Does this face render as an image?
    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self, Self::ImageRef(_))
    }
}

impl PartialEq for FaceValue {
    fn eq(&self, other: &Self) -> bool {
        self.ident() == other.ident()
    }
}

impl Eq for FaceValue {}

impl Hash for FaceValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ident().hash(state);
    }
}

/// Unique card token within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

/// One dealt card. Immutable after deck construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique token within the deck.
    pub id: CardId,
    /// Matching key and rendering hint.
    pub face: FaceValue,
    /// Index in the board sequence, fixed for the session.
    pub position: usize,
}

/// The face values available for deck construction.
///
/// Holds the user's custom image refs; the symbolic set is always available
/// as the fallback. Produced by [`crate::images::ImageLibrary::face_pool`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacePool {
    custom: Vec<String>,
}

impl FacePool {
    /// Pool backed by the user's custom images.
    #[must_use]
    pub fn new(custom: Vec<String>) -> Self {
        Self { custom }
    }

    /// Pool with no custom images (symbolic faces only).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of custom images available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.custom.len()
    }

    /// True when no custom images are available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.custom.is_empty()
    }

    /// The custom image refs.
    #[must_use]
    pub fn custom(&self) -> &[String] {
        &self.custom
    }
}

/// Build a shuffled deck of `2 * num_pairs` cards.
///
/// Face selection: a uniform random subset of the custom pool when it holds
/// at least `num_pairs` images, otherwise the first `num_pairs` symbolic
/// glyphs. Custom and symbolic faces are never mixed in one deck.
///
/// Pure apart from the injected RNG. `num_pairs` must already be validated
/// by [`crate::core::GameConfig`].
#[must_use]
pub fn build_deck(pool: &FacePool, num_pairs: usize, rng: &mut GameRng) -> Vec<Card> {
    debug_assert!(num_pairs <= SYMBOLIC_FACES.len());

    let faces: Vec<FaceValue> = if pool.len() >= num_pairs {
        rng.sample_indices(pool.len(), num_pairs)
            .into_iter()
            .map(|i| FaceValue::image(pool.custom()[i].clone()))
            .collect()
    } else {
        SYMBOLIC_FACES[..num_pairs]
            .iter()
            .map(|&glyph| FaceValue::symbolic(glyph))
            .collect()
    };

    let mut cards: Vec<Card> = faces
        .iter()
        .chain(faces.iter())
        .enumerate()
        .map(|(i, face)| Card {
            id: CardId(i as u32),
            face: face.clone(),
            position: 0,
        })
        .collect();

    rng.shuffle(&mut cards);
    for (position, card) in cards.iter_mut().enumerate() {
        card.position = position;
    }

    cards
}
