//! Account service contract.
//!
//! The engine only needs two facts from the account layer: is it ready, and
//! which user (if any) is signed in. A missing user means "no persisted
//! custom images", never an error. Provider error codes are mapped to
//! user-facing messages here so the presentation layer stays dumb.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::UserId;

/// Snapshot of the account layer's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Signed-in user, if any. `None` is anonymous/local play.
    pub user: Option<UserId>,
    /// False while the account layer is still resolving credentials.
    pub ready: bool,
}

impl AuthState {
    /// Still resolving; callers should wait before loading images.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, ready: false }
    }

    /// Resolved with no signed-in user.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None, ready: true }
    }

    /// Resolved with a signed-in user.
    #[must_use]
    pub fn signed_in(user: UserId) -> Self {
        Self { user: Some(user), ready: true }
    }
}

/// Source of the current authentication state.
///
/// Emitted on session start and on credential changes; the engine never
/// looks inside the account layer.
pub trait AccountService {
    /// The current state.
    fn auth_state(&self) -> AuthState;
}

/// Fixed-state service for local play and tests.
#[derive(Clone, Debug)]
pub struct StaticAccounts {
    state: AuthState,
}

impl StaticAccounts {
    /// Service stuck in the given state.
    #[must_use]
    pub fn new(state: AuthState) -> Self {
        Self { state }
    }
}

impl AccountService for StaticAccounts {
    fn auth_state(&self) -> AuthState {
        self.state.clone()
    }
}

/// Authentication failure, mapped from provider error codes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("This account has been disabled")]
    UserDisabled,
    #[error("User not found")]
    UserNotFound,
    #[error("Incorrect password")]
    WrongPassword,
    #[error("Email is already in use")]
    EmailInUse,
    #[error("Password is too weak")]
    WeakPassword,
    #[error("Operation not allowed")]
    OperationNotAllowed,
    #[error("Authentication error: {0}")]
    Other(String),
}

impl AuthError {
    /// Map a provider error code to a typed error.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "auth/invalid-email" => Self::InvalidEmail,
            "auth/user-disabled" => Self::UserDisabled,
            "auth/user-not-found" => Self::UserNotFound,
            "auth/wrong-password" => Self::WrongPassword,
            "auth/email-already-in-use" => Self::EmailInUse,
            "auth/weak-password" => Self::WeakPassword,
            "auth/operation-not-allowed" => Self::OperationNotAllowed,
            other => Self::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_states() {
        assert!(!AuthState::loading().ready);
        assert!(AuthState::anonymous().ready);
        assert_eq!(AuthState::anonymous().user, None);

        let state = AuthState::signed_in(UserId::new("u1"));
        assert!(state.ready);
        assert_eq!(state.user, Some(UserId::new("u1")));
    }

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(AuthError::from_code("auth/invalid-email"), AuthError::InvalidEmail);
        assert_eq!(AuthError::from_code("auth/wrong-password"), AuthError::WrongPassword);
        assert_eq!(
            AuthError::from_code("auth/weird-new-code"),
            AuthError::Other("auth/weird-new-code".to_string())
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AuthError::UserNotFound.to_string(), "User not found");
        assert_eq!(
            AuthError::Other("auth/x".into()).to_string(),
            "Authentication error: auth/x"
        );
    }
}
