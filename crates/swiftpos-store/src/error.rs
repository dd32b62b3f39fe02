//! # Store Error Types
//!
//! Error types for document store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the collection name                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in the shell) ← Surfaced to the screens                     │
//! │                                                                         │
//! │  Screen loaders never see Corrupt: they go through load_or_default,    │
//! │  which falls back to the empty collection. Only the strict bootstrap   │
//! │  reads propagate it.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Document store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in its collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation (e.g. duplicate username).
    #[error("Duplicate {field}: '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A document exists but does not parse as its collection type.
    ///
    /// Raised only by the strict reads; the screen loaders treat a corrupt
    /// document as empty instead.
    #[error("Corrupt '{collection}' document: {reason}")]
    Corrupt { collection: String, reason: String },

    /// Reading or writing a document failed at the filesystem level.
    #[error("Storage I/O failed for '{collection}': {source}")]
    Io {
        collection: String,
        #[source]
        source: std::io::Error,
    },

    /// The data directory could not be created or opened.
    #[error("Could not open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a Duplicate error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a Corrupt error for a collection.
    pub fn corrupt(collection: impl Into<String>, err: &serde_json::Error) -> Self {
        StoreError::Corrupt {
            collection: collection.into(),
            reason: err.to_string(),
        }
    }

    /// Creates an Io error for a collection.
    pub fn io(collection: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            collection: collection.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::not_found("Product", "p1");
        assert_eq!(err.to_string(), "Product not found: p1");

        let err = StoreError::duplicate("username", "owner");
        assert_eq!(err.to_string(), "Duplicate username: 'owner' already exists");
    }

    #[test]
    fn test_corrupt_includes_collection() {
        let parse_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err = StoreError::corrupt("products", &parse_err);
        assert!(err.to_string().starts_with("Corrupt 'products' document:"));
    }
}
