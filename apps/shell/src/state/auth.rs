//! # Auth Session
//!
//! The explicit session object: who is signed in, observable by views.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  bootstrap ──► restore persisted auth document ──► AuthSession          │
//! │                                                                         │
//! │  login(username, password)                                              │
//! │       │  exact match against users collection                           │
//! │       ├── hit:  persist {user, isAuthenticated:true} ► notify ► Ok      │
//! │       └── miss: nothing stored ► Err(AuthError) shown inline            │
//! │                                                                         │
//! │  logout() ──► delete auth document ► notify ► signed out                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use swiftpos_core::{AuthState, Role, User};
use swiftpos_store::LocalStore;

use crate::error::AppError;

/// Callback invoked with the new state after every login/logout.
pub type AuthListener = Box<dyn Fn(&AuthState) + Send>;

/// Shared, observable session state.
///
/// Cheap to clone; all clones see the same state and the same subscriber
/// list. Views subscribe for change notification instead of re-reading an
/// implicit global.
#[derive(Clone)]
pub struct AuthSession {
    state: Arc<Mutex<AuthState>>,
    listeners: Arc<Mutex<Vec<AuthListener>>>,
}

impl AuthSession {
    /// Creates a session seeded with a restored (or signed-out) state.
    pub fn new(initial: AuthState) -> Self {
        AuthSession {
            state: Arc::new(Mutex::new(initial)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a copy of the current state.
    pub fn current(&self) -> AuthState {
        self.state.lock().expect("Auth mutex poisoned").clone()
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<User> {
        self.current().user
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.current().is_authenticated
    }

    /// The signed-in user's role, if any.
    pub fn role(&self) -> Option<Role> {
        self.current().user.map(|u| u.role)
    }

    /// Registers a change listener, called after every login/logout.
    pub fn subscribe(&self, listener: AuthListener) {
        self.listeners
            .lock()
            .expect("Auth listeners mutex poisoned")
            .push(listener);
    }

    fn set(&self, new_state: AuthState) {
        *self.state.lock().expect("Auth mutex poisoned") = new_state.clone();
        for listener in self
            .listeners
            .lock()
            .expect("Auth listeners mutex poisoned")
            .iter()
        {
            listener(&new_state);
        }
    }

    /// Validates credentials, persists the session and notifies subscribers.
    ///
    /// ## Errors
    /// `AuthError` with an inline message on a credential miss; nothing is
    /// stored in that case.
    pub fn login(
        &self,
        store: &LocalStore,
        username: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user = match store.users().find_by_credentials(username, password) {
            Some(user) => user,
            None => {
                warn!(username, "Login rejected");
                return Err(AppError::auth("Username atau password tidak valid"));
            }
        };

        let state = AuthState::signed_in(user.clone());
        store.session().save(&state)?;
        self.set(state);

        info!(username = %user.username, role = ?user.role, "Login succeeded");
        Ok(user)
    }

    /// Clears the persisted session and notifies subscribers.
    pub fn logout(&self, store: &LocalStore) -> Result<(), AppError> {
        store.session().clear()?;
        self.set(AuthState::signed_out());

        info!("Logged out");
        Ok(())
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("state", &self.current())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use swiftpos_store::StoreConfig;
    use tempfile::tempdir;

    fn store_with_owner(dir: &tempfile::TempDir) -> LocalStore {
        let store = LocalStore::open(StoreConfig::new(dir.path())).unwrap();
        store.users().ensure_default_owner().unwrap();
        store
    }

    #[test]
    fn test_login_persists_session_and_notifies() {
        let dir = tempdir().unwrap();
        let store = store_with_owner(&dir);
        let session = AuthSession::new(AuthState::signed_out());

        let notifications = Arc::new(AtomicUsize::new(0));
        let counter = notifications.clone();
        session.subscribe(Box::new(move |state| {
            assert!(state.is_authenticated);
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let user = session.login(&store, "owner", "owner123").unwrap();
        assert_eq!(user.username, "owner");
        assert!(session.is_authenticated());
        assert_eq!(notifications.load(Ordering::SeqCst), 1);

        // The auth document survives for the next bootstrap
        let restored = store.session().load().unwrap();
        assert!(restored.is_authenticated);
        assert_eq!(restored.user.unwrap().username, "owner");
    }

    #[test]
    fn test_failed_login_stores_nothing() {
        let dir = tempdir().unwrap();
        let store = store_with_owner(&dir);
        let session = AuthSession::new(AuthState::signed_out());

        let err = session.login(&store, "nobody", "owner123").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::AuthError);
        assert!(!session.is_authenticated());
        assert!(!store.session().load().unwrap().is_authenticated);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let dir = tempdir().unwrap();
        let store = store_with_owner(&dir);
        let session = AuthSession::new(AuthState::signed_out());

        assert!(session.login(&store, "owner", "wrong").is_err());
    }

    #[test]
    fn test_logout_clears_persisted_session() {
        let dir = tempdir().unwrap();
        let store = store_with_owner(&dir);
        let session = AuthSession::new(AuthState::signed_out());

        session.login(&store, "owner", "owner123").unwrap();
        session.logout(&store).unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(store.session().load().unwrap(), AuthState::signed_out());
    }
}
