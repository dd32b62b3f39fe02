//! # Error Types
//!
//! Domain-specific error types for swiftpos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  swiftpos-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Form input validation failures                 │
//! │                                                                         │
//! │  swiftpos-store errors (separate crate)                                │
//! │  └── StoreError       - Document read/write failures                   │
//! │                                                                         │
//! │  Shell errors (apps/shell)                                             │
//! │  └── AppError         - What the screens surface inline                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → inline message         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (name, quantities, amounts)
//! 3. Errors are enum variants, never String
//! 4. Stock and payment rejections are ordinary values, never panics

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations. The shell catches them and
/// surfaces inline messages; nothing here aborts the application.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The requested product/variant pair is not in the catalog.
    #[error("Variant {variant_id} of product {product_id} not found")]
    VariantNotFound {
        product_id: String,
        variant_id: String,
    },

    /// Adding or raising a line would exceed the variant's stock.
    ///
    /// Raised both when clicking a sold-out variant and when a quantity
    /// edit would pass the snapshot's stock. The cart line is left
    /// unchanged.
    #[error("Insufficient stock for {name} ({value}): available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        value: String,
        available: i64,
        requested: i64,
    },

    /// A quantity edit tried to go below one unit.
    ///
    /// Removal is a separate, explicit action.
    #[error("Quantity must be at least 1 (requested {requested})")]
    QuantityBelowOne { requested: i64 },

    /// The referenced cart line does not exist.
    #[error("Item {0} not in cart")]
    ItemNotInCart(String),

    /// Checkout was attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The tendered amount does not cover the total.
    #[error("Insufficient payment: total {total}, tendered {tendered}")]
    InsufficientPayment { total: Money, tendered: Money },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g. a malformed money amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. duplicate username).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
