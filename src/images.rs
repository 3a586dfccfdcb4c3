//! The user's custom image collection.
//!
//! `ImageLibrary` sits between the collaborators and the deck builder: it
//! loads the signed-in user's images from the store, applies add/remove
//! edits with write-back, and hands the deck builder a [`FacePool`].
//!
//! Collaborator failures are absorbed here. A failed load leaves the library
//! empty (symbolic faces take over); a failed save keeps the local edit and
//! surfaces the error so the UI can mention it. Game state is never touched.

use serde::{Deserialize, Serialize};

use crate::account::AccountService;
use crate::deck::FacePool;
use crate::store::{ImageStore, StoreError, UserId};

/// Custom card images for the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageLibrary {
    user: Option<UserId>,
    images: Vec<String>,
}

impl ImageLibrary {
    /// Empty library for anonymous play.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Load the current user's images.
    ///
    /// Not-ready or anonymous account state, a missing document, and store
    /// failures all degrade to an empty library; failures are logged, never
    /// propagated.
    #[must_use]
    pub fn load(accounts: &dyn AccountService, store: &dyn ImageStore) -> Self {
        let state = accounts.auth_state();
        if !state.ready {
            return Self::anonymous();
        }
        let Some(user) = state.user else {
            return Self::anonymous();
        };

        let images = match store.get(&user) {
            Ok(Some(images)) => images,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(%user, %err, "image load failed, using symbolic faces");
                Vec::new()
            }
        };

        Self { user: Some(user), images }
    }

    /// Add an image and persist the new set.
    ///
    /// The local collection is updated even when the save fails; the error
    /// is returned so the UI can report it. Anonymous libraries skip the
    /// write.
    pub fn add_image(
        &mut self,
        uri: impl Into<String>,
        store: &mut dyn ImageStore,
    ) -> Result<(), StoreError> {
        self.images.push(uri.into());
        self.save(store)
    }

    /// Remove the image at `index` and persist the new set.
    ///
    /// Returns false (without touching the store) for an out-of-range index.
    pub fn remove_image(
        &mut self,
        index: usize,
        store: &mut dyn ImageStore,
    ) -> Result<bool, StoreError> {
        if index >= self.images.len() {
            return Ok(false);
        }
        self.images.remove(index);
        self.save(store)?;
        Ok(true)
    }

    fn save(&self, store: &mut dyn ImageStore) -> Result<(), StoreError> {
        let Some(user) = &self.user else {
            return Ok(());
        };
        store.put(user, &self.images).inspect_err(|err| {
            tracing::warn!(%user, %err, "image save failed, keeping local set");
        })
    }

    /// The owning user, if signed in.
    #[must_use]
    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    /// The image identifiers, in insertion order.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True when no custom images are available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The face pool for deck construction.
    #[must_use]
    pub fn face_pool(&self) -> FacePool {
        FacePool::new(self.images.clone())
    }
}
