//! # App Error Type
//!
//! Unified error type surfaced by the screens.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in SwiftPOS                               │
//! │                                                                         │
//! │  Screen method                                                          │
//! │  Result<T, AppError>                                                    │
//! │       │                                                                 │
//! │       ├── CoreError (stock, payment, cart) ──► inline message           │
//! │       ├── ValidationError (form fields) ─────► inline message           │
//! │       ├── StoreError::Corrupt at bootstrap ──► top-level failure        │
//! │       └── Success ───────────────────────────► re-render from state     │
//! │                                                                         │
//! │  Validation and business failures never abort the app: the screen       │
//! │  keeps its state and shows the message. Only bootstrap errors stop      │
//! │  the application from coming up.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use swiftpos_core::{CoreError, ValidationError};
use swiftpos_store::StoreError;

/// Error surfaced by screen operations.
///
/// Carries a machine-readable `code` for programmatic handling and a
/// human-readable `message` for inline display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

/// Error codes for screen responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Document store operation failed
    StorageError,

    /// Cart operation failed
    CartError,

    /// Insufficient stock
    InsufficientStock,

    /// Payment rejected
    PaymentError,

    /// Login failed or no active session
    AuthError,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::AuthError, message)
    }

    /// Creates a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::StorageError, message)
    }
}

/// Converts store errors to app errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => AppError::not_found(&entity, &id),
            StoreError::Duplicate { field, value } => AppError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            StoreError::Corrupt { .. } | StoreError::Io { .. } | StoreError::OpenFailed { .. } => {
                tracing::error!("Store operation failed: {}", err);
                AppError::new(ErrorCode::StorageError, err.to_string())
            }
        }
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::VariantNotFound { .. } => ErrorCode::NotFound,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::QuantityBelowOne { .. }
            | CoreError::ItemNotInCart(_)
            | CoreError::EmptyCart => ErrorCode::CartError,
            CoreError::InsufficientPayment { .. } => ErrorCode::PaymentError,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        AppError::new(code, err.to_string())
    }
}

/// Converts bare validation errors to app errors.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

// =============================================================================
// Unit Tests
// =============================================================================
