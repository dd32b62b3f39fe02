//! # Local Document Store
//!
//! Whole-document JSON storage under a local data directory.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Local Store Layout                                 │
//! │                                                                         │
//! │  <data dir>/                                                            │
//! │  ├── users.json      array of User                                      │
//! │  ├── auth.json       {user, isAuthenticated} or absent                  │
//! │  ├── products.json   array of Product                                   │
//! │  └── sales.json      array of Sale                                      │
//! │                                                                         │
//! │  Each collection is one JSON document, read and rewritten whole.        │
//! │  No versioning, no migration, no locking: a second process sharing      │
//! │  the directory silently wins or loses whole documents (last write).     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use swiftpos_core::{AuthState, Product, Sale, User};

use crate::error::{StoreError, StoreResult};
use crate::repository::product::ProductRepository;
use crate::repository::sale::SaleRepository;
use crate::repository::session::SessionRepository;
use crate::repository::user::UserRepository;

// =============================================================================
// Collection Names
// =============================================================================

/// The `users` collection: array of User.
pub const USERS: &str = "users";
/// The `auth` collection: the persisted session, or absent.
pub const AUTH: &str = "auth";
/// The `products` collection: array of Product.
pub const PRODUCTS: &str = "products";
/// The `sales` collection: append-only array of Sale.
pub const SALES: &str = "sales";

/// Storage budget shown by the usage gauge: 5 MiB.
pub const MAX_STORAGE_BYTES: u64 = 5 * 1024 * 1024;

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("/path/to/data");
/// let store = LocalStore::open(config)?;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the collection documents. Created if missing.
    pub root: PathBuf,
}

impl StoreConfig {
    /// Creates a new store configuration with the given data directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StoreConfig { root: root.into() }
    }
}

// =============================================================================
// Local Store
// =============================================================================

/// Handle to the document store.
///
/// Cheap to clone; every repository holds its own handle. All I/O is
/// synchronous and blocks the calling event handler.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Opens (and if needed creates) the store at the configured directory.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        fs::create_dir_all(&config.root).map_err(|source| StoreError::OpenFailed {
            path: config.root.clone(),
            source,
        })?;

        debug!(root = %config.root.display(), "Store opened");
        Ok(LocalStore { root: config.root })
    }

    /// The data directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }

    // -------------------------------------------------------------------------
    // Raw document access
    // -------------------------------------------------------------------------

    /// Reads a collection document as raw text. Missing documents are `None`.
    pub fn read_document(&self, collection: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.document_path(collection)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::io(collection, err)),
        }
    }

    /// Rewrites a collection document in full.
    pub fn write_document(&self, collection: &str, contents: &str) -> StoreResult<()> {
        fs::write(self.document_path(collection), contents)
            .map_err(|err| StoreError::io(collection, err))
    }

    /// Deletes a collection document. Removing an absent document is fine.
    pub fn remove_document(&self, collection: &str) -> StoreResult<()> {
        match fs::remove_file(self.document_path(collection)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::io(collection, err)),
        }
    }

    // -------------------------------------------------------------------------
    // Typed document access
    // -------------------------------------------------------------------------

    /// Strict typed read: missing is `None`, corrupt is an error.
    ///
    /// Used by bootstrap and by [`LocalStore::verify_documents`].
    pub fn load<T: DeserializeOwned>(&self, collection: &str) -> StoreResult<Option<T>> {
        match self.read_document(collection)? {
            None => Ok(None),
            Some(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(|err| StoreError::corrupt(collection, &err)),
        }
    }

    /// Fallback typed read: missing or corrupt reads as the default
    /// (empty) collection.
    ///
    /// This is the screen loaders' path; a corrupt document is logged and
    /// the screen renders empty rather than failing.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, collection: &str) -> T {
        match self.load(collection) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(err) => {
                warn!(collection, %err, "Falling back to empty collection");
                T::default()
            }
        }
    }

    /// Serializes `value` and rewrites the whole collection document.
    pub fn save<T: Serialize>(&self, collection: &str, value: &T) -> StoreResult<()> {
        let contents =
            serde_json::to_string(value).map_err(|err| StoreError::corrupt(collection, &err))?;
        self.write_document(collection, &contents)
    }

    // -------------------------------------------------------------------------
    // Bootstrap verification
    // -------------------------------------------------------------------------

    /// Strict-parses every collection that exists.
    ///
    /// App bootstrap calls this before anything renders: a corrupt document
    /// is a hard failure here, while the same document would read as empty
    /// from a screen loader. Missing documents pass (first run).
    pub fn verify_documents(&self) -> StoreResult<()> {
        self.load::<Vec<User>>(USERS)?;
        self.load::<AuthState>(AUTH)?;
        self.load::<Vec<Product>>(PRODUCTS)?;
        self.load::<Vec<Sale>>(SALES)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Storage usage gauge
    // -------------------------------------------------------------------------

    /// Total bytes used across the four documents, against the 5 MiB budget.
    ///
    /// Best-effort: documents that cannot be stat'ed count as zero.
    pub fn usage(&self) -> StorageUsage {
        let used_bytes = [USERS, AUTH, PRODUCTS, SALES]
            .iter()
            .filter_map(|c| fs::metadata(self.document_path(c)).ok())
            .map(|m| m.len())
            .sum();

        StorageUsage {
            used_bytes,
            budget_bytes: MAX_STORAGE_BYTES,
        }
    }

    // -------------------------------------------------------------------------
    // Repositories
    // -------------------------------------------------------------------------

    /// Product collection operations.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Sales collection operations.
    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.clone())
    }

    /// User collection operations.
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.clone())
    }

    /// Persisted session operations.
    pub fn session(&self) -> SessionRepository {
        SessionRepository::new(self.clone())
    }
}

// =============================================================================
// Storage Usage
// =============================================================================

/// Snapshot of store size for the navigation gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageUsage {
    pub used_bytes: u64,
    pub budget_bytes: u64,
}

impl StorageUsage {
    /// Percentage of the budget in use (can exceed 100.0).
    pub fn percent_used(&self) -> f64 {
        self.used_bytes as f64 / self.budget_bytes as f64 * 100.0
    }

    /// Human-readable size, e.g. "1.5KB" or "2.0MB".
    pub fn format_size(bytes: u64) -> String {
        if bytes < 1024 {
            format!("{bytes}B")
        } else if bytes < 1024 * 1024 {
            format!("{:.1}KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1}MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_store(dir: &tempfile::TempDir) -> LocalStore {
        LocalStore::open(StoreConfig::new(dir.path())).unwrap()
    }

    #[test]
    fn test_missing_document_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        assert!(store.read_document(PRODUCTS).unwrap().is_none());
        assert!(store.load::<Vec<Product>>(PRODUCTS).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let users = vec![User {
            id: "u1".to_string(),
            username: "owner".to_string(),
            password: "owner123".to_string(),
            name: "System Owner".to_string(),
            role: swiftpos_core::Role::Owner,
        }];
        store.save(USERS, &users).unwrap();

        let loaded: Vec<User> = store.load(USERS).unwrap().unwrap();
        assert_eq!(loaded, users);
    }

    #[test]
    fn test_corrupt_document_is_strict_error_but_default_fallback() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        store.write_document(PRODUCTS, "{not json").unwrap();

        let err = store.load::<Vec<Product>>(PRODUCTS).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));

        let fallback: Vec<Product> = store.load_or_default(PRODUCTS);
        assert!(fallback.is_empty());
    }

    #[test]
    fn test_verify_documents_passes_on_empty_store() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        store.verify_documents().unwrap();
    }

    #[test]
    fn test_verify_documents_fails_on_corrupt_collection() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        store.write_document(SALES, "[{\"id\": 42}]").unwrap();
        assert!(store.verify_documents().is_err());
    }

    #[test]
    fn test_remove_document_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        store.write_document(AUTH, "{}").unwrap();
        store.remove_document(AUTH).unwrap();
        store.remove_document(AUTH).unwrap();
        assert!(store.read_document(AUTH).unwrap().is_none());
    }

    #[test]
    fn test_usage_counts_document_bytes() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.usage().used_bytes, 0);

        store.write_document(USERS, "[]").unwrap();
        store.write_document(SALES, "[]").unwrap();

        let usage = store.usage();
        assert_eq!(usage.used_bytes, 4);
        assert_eq!(usage.budget_bytes, MAX_STORAGE_BYTES);
        assert!(usage.percent_used() > 0.0);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(StorageUsage::format_size(512), "512B");
        assert_eq!(StorageUsage::format_size(1536), "1.5KB");
        assert_eq!(StorageUsage::format_size(2 * 1024 * 1024), "2.0MB");
    }
}
