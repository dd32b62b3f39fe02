//! # Session Repository
//!
//! The persisted auth session: `{user, isAuthenticated}` in the `auth`
//! document. Survives restarts until explicit logout, which deletes the
//! document.

use tracing::debug;

use swiftpos_core::AuthState;

use crate::error::StoreResult;
use crate::local::{LocalStore, AUTH};

/// Repository for the persisted session.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    store: LocalStore,
}

impl SessionRepository {
    /// Creates a new SessionRepository.
    pub fn new(store: LocalStore) -> Self {
        SessionRepository { store }
    }

    /// Loads the persisted session.
    ///
    /// Missing means signed out; a corrupt document is an error (this read
    /// happens during bootstrap, where corruption is a hard failure).
    pub fn load(&self) -> StoreResult<AuthState> {
        Ok(self.store.load(AUTH)?.unwrap_or_default())
    }

    /// Persists the session after a successful login.
    pub fn save(&self, state: &AuthState) -> StoreResult<()> {
        debug!(
            user = state.user.as_ref().map(|u| u.username.as_str()),
            "Persisting session"
        );
        self.store.save(AUTH, state)
    }

    /// Clears the persisted session on logout.
    pub fn clear(&self) -> StoreResult<()> {
        debug!("Clearing session");
        self.store.remove_document(AUTH)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
