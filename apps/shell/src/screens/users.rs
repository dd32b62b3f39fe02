//! # User Management Screen
//!
//! CRUD over the users collection with role assignment. Owner-only.

use uuid::Uuid;

use swiftpos_core::{
    validation::{validate_display_name, validate_password, validate_username},
    Role, User,
};
use swiftpos_store::LocalStore;

use crate::error::AppError;

// =============================================================================
// User Form
// =============================================================================

/// The add/edit user form state.
///
/// When editing, a blank password keeps the user's current password.
#[derive(Debug, Clone)]
pub struct UserForm {
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    editing: Option<String>,
}

impl UserForm {
    /// A blank form for a new user.
    pub fn new() -> Self {
        UserForm {
            username: String::new(),
            password: String::new(),
            name: String::new(),
            role: Role::Shopkeeper,
            editing: None,
        }
    }

    /// A form pre-filled from an existing user. The password field starts
    /// blank.
    pub fn edit(user: &User) -> Self {
        UserForm {
            username: user.username.clone(),
            password: String::new(),
            name: user.name.clone(),
            role: user.role,
            editing: Some(user.id.clone()),
        }
    }

    /// Whether this form edits an existing user.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

impl Default for UserForm {
    fn default() -> Self {
        UserForm::new()
    }
}

// =============================================================================
// User Management Screen
// =============================================================================

/// The user management page state.
#[derive(Debug)]
pub struct UserManagementScreen {
    store: LocalStore,
    users: Vec<User>,
}

impl UserManagementScreen {
    /// Opens the screen, loading the users collection.
    pub fn open(store: LocalStore) -> Self {
        let users = store.users().list();
        UserManagementScreen { store, users }
    }

    /// The users as currently listed.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    fn reload(&mut self) {
        self.users = self.store.users().list();
    }

    /// Saves the form: adds a new user or rewrites the edited one.
    ///
    /// Usernames are unique; on edit, a blank password keeps the stored
    /// one.
    pub fn save(&mut self, form: &UserForm) -> Result<(), AppError> {
        validate_username(&form.username)?;
        validate_display_name(&form.name)?;

        match &form.editing {
            Some(id) => {
                let existing = self
                    .store
                    .users()
                    .find_by_id(id)
                    .ok_or_else(|| AppError::not_found("User", id))?;
                let password = if form.password.is_empty() {
                    existing.password
                } else {
                    form.password.clone()
                };

                self.store.users().update(User {
                    id: id.clone(),
                    username: form.username.trim().to_string(),
                    password,
                    name: form.name.trim().to_string(),
                    role: form.role,
                })?;
            }
            None => {
                validate_password(&form.password)?;

                self.store.users().add(User {
                    id: Uuid::new_v4().to_string(),
                    username: form.username.trim().to_string(),
                    password: form.password.clone(),
                    name: form.name.trim().to_string(),
                    role: form.role,
                })?;
            }
        }

        self.reload();
        Ok(())
    }

    /// Deletes a user. Their past sales keep the id and show the
    /// placeholder cashier name from now on.
    pub fn delete(&mut self, user_id: &str) -> Result<(), AppError> {
        self.store.users().remove(user_id)?;
        self.reload();
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
