//! # Store State
//!
//! Wraps the `LocalStore` handle for the screens.

use swiftpos_store::{LocalStore, StorageUsage};

/// Wrapper around `LocalStore` handed to the screens.
///
/// Keeps the intent explicit: screens receive this state object rather
/// than opening store handles of their own.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: LocalStore,
}

impl StoreState {
    /// Creates a new StoreState wrapping the opened store.
    pub fn new(store: LocalStore) -> Self {
        StoreState { store }
    }

    /// Returns a reference to the inner LocalStore.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let products = store_state.inner().products().list();
    /// ```
    pub fn inner(&self) -> &LocalStore {
        &self.store
    }

    /// Current storage usage for the navigation gauge.
    pub fn usage(&self) -> StorageUsage {
        self.store.usage()
    }
}
