//! # Domain Types
//!
//! Core domain types used throughout SwiftPOS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  items          │   │  username       │       │
//! │  │  variants       │   │  total_cents    │   │  password       │       │
//! │  │  min_wholesale  │   │  cashier_id     │   │  role           │       │
//! │  └────────┬────────┘   └────────┬────────┘   └─────────────────┘       │
//! │           │                     │                                       │
//! │  ┌────────▼────────┐   ┌────────▼────────┐                             │
//! │  │ ProductVariant  │   │    CartItem     │                             │
//! │  │  type/value     │   │  VariantSnapshot│  ← frozen copy, carries     │
//! │  │  price, stock   │   │  quantity       │    min_wholesale_qty        │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartItem` holds a `VariantSnapshot`, not a reference into the catalog.
//! Catalog edits after an item is added do not affect an in-progress cart,
//! and recorded sales keep the prices they were rung up at.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Role
// =============================================================================

/// Access role of a user.
///
/// A closed set with an explicit privilege order:
/// `Owner > StoreManager > Shopkeeper`. Route access is declared per route
/// as an explicit role set; the rank only expresses the overall ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    StoreManager,
    Shopkeeper,
}

impl Role {
    /// All roles, highest privilege first.
    pub const ALL: [Role; 3] = [Role::Owner, Role::StoreManager, Role::Shopkeeper];

    /// Privilege rank; higher outranks lower.
    pub const fn rank(&self) -> u8 {
        match self {
            Role::Owner => 2,
            Role::StoreManager => 1,
            Role::Shopkeeper => 0,
        }
    }

    /// Whether this role sits at or above `other` in the privilege order.
    pub const fn at_least(&self, other: Role) -> bool {
        self.rank() >= other.rank()
    }

    /// Human-readable label ("store_manager" → "Store Manager").
    pub const fn label(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::StoreManager => "Store Manager",
            Role::Shopkeeper => "Shopkeeper",
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// A user account.
///
/// Passwords are stored and compared as plaintext; there is no hashing,
/// session expiry or lockout anywhere in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Unique login name.
    pub username: String,
    pub password: String,
    /// Display name, shown on receipts and in the sales ledger.
    pub name: String,
    pub role: Role,
}

// =============================================================================
// Product & Variants
// =============================================================================

/// A purchasable SKU under a product, distinguished by a type/value pair
/// (e.g. size=250gr) with its own prices and stock count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    /// Variant dimension, e.g. "size" or "taste". Lowercased on save.
    #[serde(rename = "type")]
    pub variant_type: String,
    /// Variant value, e.g. "250gr" or "vanilla".
    pub value: String,
    pub price_cents: i64,
    pub wholesale_price_cents: i64,
    /// Units on hand. Decremented only at checkout.
    pub stock: i64,
}

impl ProductVariant {
    /// Returns the normal price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the wholesale price as Money.
    #[inline]
    pub fn wholesale_price(&self) -> Money {
        Money::from_cents(self.wholesale_price_cents)
    }

    /// Whether any stock remains to sell.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A product with one or more variants.
///
/// `min_wholesale_qty` is a per-product threshold applied to every variant:
/// a cart line at or above it is priced at the variant's wholesale price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Ordered, non-empty.
    pub variants: Vec<ProductVariant>,
    pub min_wholesale_qty: i64,
}

impl Product {
    /// Looks up a variant by id.
    pub fn variant(&self, variant_id: &str) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }

    /// Freezes a variant into a snapshot carrying this product's
    /// wholesale threshold.
    pub fn snapshot(&self, variant: &ProductVariant) -> VariantSnapshot {
        VariantSnapshot {
            id: variant.id.clone(),
            variant_type: variant.variant_type.clone(),
            value: variant.value.clone(),
            price_cents: variant.price_cents,
            wholesale_price_cents: variant.wholesale_price_cents,
            stock: variant.stock,
            min_wholesale_qty: self.min_wholesale_qty,
        }
    }
}

// =============================================================================
// Variant Snapshot
// =============================================================================

/// A frozen copy of a variant at the moment it entered a cart, with the
/// owning product's `min_wholesale_qty` copied in.
///
/// All cart pricing and the stock guard on quantity edits read from this
/// snapshot, not from the live catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSnapshot {
    pub id: String,
    #[serde(rename = "type")]
    pub variant_type: String,
    pub value: String,
    pub price_cents: i64,
    pub wholesale_price_cents: i64,
    pub stock: i64,
    pub min_wholesale_qty: i64,
}

impl VariantSnapshot {
    /// Whether a line of `quantity` units is priced wholesale.
    #[inline]
    pub fn is_wholesale(&self, quantity: i64) -> bool {
        quantity >= self.min_wholesale_qty
    }

    /// The pricing rule.
    ///
    /// `unit_price = quantity >= min_wholesale_qty ? wholesale_price : price`
    ///
    /// No proration, no partial-wholesale blending: the whole line switches
    /// price once the threshold is reached.
    pub fn unit_price(&self, quantity: i64) -> Money {
        if self.is_wholesale(quantity) {
            Money::from_cents(self.wholesale_price_cents)
        } else {
            Money::from_cents(self.price_cents)
        }
    }

    /// Units still missing before the wholesale price applies
    /// (0 when already wholesale).
    pub fn remaining_for_wholesale(&self, quantity: i64) -> i64 {
        if self.is_wholesale(quantity) {
            0
        } else {
            self.min_wholesale_qty - quantity
        }
    }

    /// Label for receipts and the cart view, e.g. "size: 250gr".
    pub fn label(&self) -> String {
        format!("{}: {}", self.variant_type, self.value)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart; also the shape recorded inside a `Sale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub product_id: String,
    pub variant_id: String,
    /// Product name at time of adding (frozen).
    pub name: String,
    pub variant: VariantSnapshot,
    /// Always >= 1 and never above the snapshot's stock.
    pub quantity: i64,
}

impl CartItem {
    /// Current unit price under the wholesale rule.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.variant.unit_price(self.quantity)
    }

    /// Line total (`unit_price × quantity`).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Whether this line is priced wholesale.
    #[inline]
    pub fn is_wholesale(&self) -> bool {
        self.variant.is_wholesale(self.quantity)
    }

    /// Units missing before this line turns wholesale.
    #[inline]
    pub fn remaining_for_wholesale(&self) -> i64 {
        self.variant.remaining_for_wholesale(self.quantity)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale. Immutable once appended to the ledger; the total is
/// fixed at checkout time even if catalog prices change later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub items: Vec<CartItem>,
    pub total_cents: i64,
    pub timestamp: DateTime<Utc>,
    pub cashier_id: String,
}

impl Sale {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Total units across all lines.
    pub fn item_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Short receipt number: the first 8 characters of the sale id.
    pub fn receipt_number(&self) -> &str {
        &self.id[..self.id.len().min(8)]
    }
}

// =============================================================================
// Auth State
// =============================================================================

/// The persisted session record: who is signed in, if anyone.
///
/// Survives restarts until explicit logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl AuthState {
    /// A signed-in session for `user`.
    pub fn signed_in(user: User) -> Self {
        AuthState {
            user: Some(user),
            is_authenticated: true,
        }
    }

    /// The signed-out state.
    pub fn signed_out() -> Self {
        AuthState {
            user: None,
            is_authenticated: false,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState::signed_out()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
