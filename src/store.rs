//! Image store contract.
//!
//! The store keeps each user's custom card images (opaque identifiers, one
//! document per user). Writes replace the whole set. Store failures never
//! reach game state; [`crate::images::ImageLibrary`] absorbs them and falls
//! back to the symbolic faces.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable user identifier, the store's partition key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Create a user id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Store failure. Always recoverable: the worst case is symbolic faces.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Backend could not be reached.
    #[error("image store unavailable: {0}")]
    Unavailable(String),
    /// Backend refused the operation.
    #[error("image store denied access for user {0}")]
    PermissionDenied(UserId),
}

/// Per-user custom image persistence.
///
/// `get` returns `None` for users with no stored document. `put` replaces
/// the prior set wholesale.
pub trait ImageStore {
    /// Fetch a user's image set.
    fn get(&self, user: &UserId) -> Result<Option<Vec<String>>, StoreError>;

    /// Replace a user's image set.
    fn put(&mut self, user: &UserId, images: &[String]) -> Result<(), StoreError>;
}

/// In-memory store, for local play and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryImageStore {
    docs: FxHashMap<UserId, Vec<String>>,
}

impl MemoryImageStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageStore for MemoryImageStore {
    fn get(&self, user: &UserId) -> Result<Option<Vec<String>>, StoreError> {
        Ok(self.docs.get(user).cloned())
    }

    fn put(&mut self, user: &UserId, images: &[String]) -> Result<(), StoreError> {
        self.docs.insert(user.clone(), images.to_vec());
        Ok(())
    }
}
