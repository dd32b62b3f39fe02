//! # swiftpos-store: Persistence Layer for SwiftPOS
//!
//! This crate provides document storage for the SwiftPOS system: four named
//! JSON collections (`users`, `auth`, `products`, `sales`), each persisted
//! as a whole file under a local data directory.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SwiftPOS Data Flow                               │
//! │                                                                         │
//! │  Screen event handler (e.g. checkout)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   swiftpos-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐                      │   │
//! │  │   │  LocalStore   │    │  Repositories  │                      │   │
//! │  │   │  (local.rs)   │◄───│  product.rs    │                      │   │
//! │  │   │               │    │  sale.rs       │                      │   │
//! │  │   │  whole-file   │    │  user.rs       │                      │   │
//! │  │   │  JSON docs    │    │  session.rs    │                      │   │
//! │  │   └───────────────┘    └────────────────┘                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   <data dir>/users.json  auth.json  products.json  sales.json  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Document Semantics
//!
//! Reads and writes are synchronous and whole-document: every save rewrites
//! the entire collection, there is no partial update and no index. A missing
//! document reads as empty. A corrupt document is an empty-collection
//! fallback for the screen loaders ([`LocalStore::load_or_default`]) but a
//! hard error from the strict reads used at bootstrap
//! ([`LocalStore::verify_documents`]).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use swiftpos_store::{LocalStore, StoreConfig};
//!
//! let store = LocalStore::open(StoreConfig::new("/path/to/data"))?;
//! store.verify_documents()?;
//! store.users().ensure_default_owner()?;
//!
//! let products = store.products().list();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod local;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use local::{LocalStore, StorageUsage, StoreConfig, MAX_STORAGE_BYTES};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::sale::SaleRepository;
pub use repository::session::SessionRepository;
pub use repository::user::UserRepository;
