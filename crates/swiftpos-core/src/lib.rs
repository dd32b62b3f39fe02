//! # swiftpos-core: Pure Business Logic for SwiftPOS
//!
//! This crate is the heart of SwiftPOS. It contains all business logic as
//! pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SwiftPOS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Shell (apps/shell)                           │   │
//! │  │    Cashier ──► Products ──► Sales Ledger ──► Users             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ swiftpos-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │   Sale    │  │  parsing  │  │ checkout  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOCUMENT STORE • NO NETWORK • PURE FUNCTIONS     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               swiftpos-store (Persistence Layer)                │   │
//! │  │          whole-document JSON collections, repositories          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductVariant, Sale, User, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart state, stock guards, checkout computation
//! - [`error`] - Domain error types
//! - [`validation`] - Form input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic aside from id/clock
//!    generation at entity creation
//! 2. **No I/O**: Document store, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use swiftpos_core::money::Money;
//! use swiftpos_core::types::VariantSnapshot;
//!
//! let snapshot = VariantSnapshot {
//!     id: "v1".into(),
//!     variant_type: "size".into(),
//!     value: "250gr".into(),
//!     price_cents: 1000,
//!     wholesale_price_cents: 800,
//!     stock: 5,
//!     min_wholesale_qty: 3,
//! };
//!
//! // Below the wholesale threshold the normal price applies
//! assert_eq!(snapshot.unit_price(2), Money::from_cents(1000));
//! // At or above the threshold the wholesale price applies
//! assert_eq!(snapshot.unit_price(3), Money::from_cents(800));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use swiftpos_core::Money` instead of
// `use swiftpos_core::money::Money`

pub use cart::{apply_stock_decrements, Cart, CheckoutOutcome};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Username of the account auto-provisioned on first run.
pub const DEFAULT_OWNER_USERNAME: &str = "owner";

/// Password of the auto-provisioned owner account.
///
/// Credentials are stored and compared in plaintext throughout the system.
pub const DEFAULT_OWNER_PASSWORD: &str = "owner123";

/// Display name of the auto-provisioned owner account.
pub const DEFAULT_OWNER_NAME: &str = "System Owner";
