//! # User Repository
//!
//! Whole-document operations over the `users` collection, plus credential
//! lookup and first-run provisioning.
//!
//! ## First-Run Provisioning
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  App bootstrap                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  users document present? ──yes──► leave as-is (even if empty array)     │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  write [owner/owner123 "System Owner"] so the store is never locked     │
//! │  out of its own administration screens                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};
use uuid::Uuid;

use swiftpos_core::{
    Role, User, DEFAULT_OWNER_NAME, DEFAULT_OWNER_PASSWORD, DEFAULT_OWNER_USERNAME,
};

use crate::error::{StoreError, StoreResult};
use crate::local::{LocalStore, USERS};

/// Repository for user collection operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: LocalStore,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(store: LocalStore) -> Self {
        UserRepository { store }
    }

    /// Loads all users; missing or corrupt documents read as empty.
    pub fn list(&self) -> Vec<User> {
        let users: Vec<User> = self.store.load_or_default(USERS);
        debug!(count = users.len(), "Loaded users");
        users
    }

    /// Strict load for bootstrap: corrupt documents are an error.
    pub fn list_strict(&self) -> StoreResult<Vec<User>> {
        Ok(self.store.load(USERS)?.unwrap_or_default())
    }

    /// Rewrites the entire users collection.
    pub fn save_all(&self, users: &[User]) -> StoreResult<()> {
        self.store.save(USERS, &users)
    }

    /// Looks up a user by id.
    pub fn find_by_id(&self, id: &str) -> Option<User> {
        self.list().into_iter().find(|u| u.id == id)
    }

    /// Exact-match credential check. Plaintext on both sides.
    pub fn find_by_credentials(&self, username: &str, password: &str) -> Option<User> {
        self.list()
            .into_iter()
            .find(|u| u.username == username && u.password == password)
    }

    /// Appends a new user and rewrites the collection.
    ///
    /// ## Errors
    /// `StoreError::Duplicate` if the username is already taken.
    pub fn add(&self, user: User) -> StoreResult<()> {
        debug!(username = %user.username, role = ?user.role, "Adding user");

        let mut users = self.list();
        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::duplicate("username", &user.username));
        }
        users.push(user);
        self.save_all(&users)
    }

    /// Replaces an existing user by id and rewrites the collection.
    ///
    /// ## Errors
    /// - `StoreError::NotFound` if the id does not exist
    /// - `StoreError::Duplicate` if renaming onto another user's username
    pub fn update(&self, user: User) -> StoreResult<()> {
        debug!(id = %user.id, "Updating user");

        let mut users = self.list();
        if users
            .iter()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            return Err(StoreError::duplicate("username", &user.username));
        }

        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| StoreError::not_found("User", &user.id))?;
        *slot = user;
        self.save_all(&users)
    }

    /// Deletes a user by id and rewrites the collection.
    ///
    /// Historical sales keep the deleted user's id; the ledger shows a
    /// placeholder name for them from then on.
    pub fn remove(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Deleting user");

        let mut users = self.list();
        users.retain(|u| u.id != id);
        self.save_all(&users)
    }

    /// Creates the default owner account if no `users` document exists yet.
    ///
    /// Returns `true` when the account was created. A present-but-empty
    /// users array counts as "exists" and is left alone.
    pub fn ensure_default_owner(&self) -> StoreResult<bool> {
        if self.store.read_document(USERS)?.is_some() {
            return Ok(false);
        }

        let owner = User {
            id: Uuid::new_v4().to_string(),
            username: DEFAULT_OWNER_USERNAME.to_string(),
            password: DEFAULT_OWNER_PASSWORD.to_string(),
            name: DEFAULT_OWNER_NAME.to_string(),
            role: Role::Owner,
        };
        self.save_all(&[owner])?;

        info!("Provisioned default owner account");
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
