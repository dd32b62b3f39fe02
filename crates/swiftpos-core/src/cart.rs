//! # Cart & Checkout
//!
//! Cart state, stock guards and the checkout computation. This is the one
//! component with non-trivial branching logic in the system.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Cashier Action            Cart Method              Guard               │
//! │  ──────────────            ───────────              ─────               │
//! │                                                                         │
//! │  Click variant ──────────► add_variant() ─────────► stock > quantity    │
//! │                                                                         │
//! │  +/- buttons ────────────► update_quantity() ─────► 1 <= qty <= stock   │
//! │                                                                         │
//! │  Quantity input ─────────► set_quantity() ────────► 1 <= qty <= stock   │
//! │                                                                         │
//! │  Remove button ──────────► remove_item()                                │
//! │                                                                         │
//! │  Pay ────────────────────► checkout() ────────────► tendered >= total   │
//! │                                                                         │
//! │  A failed guard leaves the cart unchanged; the caller surfaces the      │
//! │  error inline and nothing is persisted.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartItem, Product, ProductVariant, Sale};

// =============================================================================
// Cart
// =============================================================================

/// The cashier's in-progress cart.
///
/// ## Invariants
/// - Lines are unique by `(product_id, variant_id)`; clicking the same
///   variant again increments its quantity
/// - Every line's quantity is >= 1 and never above its snapshot's stock
/// - Lives only in screen memory; discarded on checkout or navigation
#[derive(Debug, Clone, Default)]
pub struct Cart {
    /// Lines in the cart.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a variant, or increments the existing line.
    ///
    /// ## Guards
    /// - A sold-out variant (stock <= 0) is rejected outright
    /// - An existing line already at the variant's stock is rejected
    ///
    /// The stock read here is the live catalog variant; quantity edits
    /// afterwards are guarded by the frozen snapshot.
    pub fn add_variant(&mut self, product: &Product, variant: &ProductVariant) -> CoreResult<()> {
        if variant.stock <= 0 {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                value: variant.value.clone(),
                available: variant.stock,
                requested: 1,
            });
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id && i.variant_id == variant.id)
        {
            if item.quantity >= variant.stock {
                return Err(CoreError::InsufficientStock {
                    name: product.name.clone(),
                    value: variant.value.clone(),
                    available: variant.stock,
                    requested: item.quantity + 1,
                });
            }
            item.quantity += 1;
            return Ok(());
        }

        self.items.push(CartItem {
            id: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            variant_id: variant.id.clone(),
            name: product.name.clone(),
            variant: product.snapshot(variant),
            quantity: 1,
        });
        Ok(())
    }

    /// Adjusts a line's quantity by `delta` (from the +/- buttons).
    ///
    /// ## Guards
    /// - The resulting quantity must stay >= 1 (removal is explicit)
    /// - The resulting quantity must not exceed the snapshot's stock
    pub fn update_quantity(&mut self, item_id: &str, delta: i64) -> CoreResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::ItemNotInCart(item_id.to_string()))?;

        let new_quantity = item.quantity + delta;
        if new_quantity < 1 {
            return Err(CoreError::QuantityBelowOne {
                requested: new_quantity,
            });
        }
        if new_quantity > item.variant.stock {
            return Err(CoreError::InsufficientStock {
                name: item.name.clone(),
                value: item.variant.value.clone(),
                available: item.variant.stock,
                requested: new_quantity,
            });
        }

        item.quantity = new_quantity;
        Ok(())
    }

    /// Sets a line's quantity directly (from the quantity input field).
    ///
    /// Same guards as [`Cart::update_quantity`]; a rejected edit leaves the
    /// current quantity unchanged.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) -> CoreResult<()> {
        let current = self
            .items
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::ItemNotInCart(item_id.to_string()))?
            .quantity;
        self.update_quantity(item_id, quantity - current)
    }

    /// Removes a line from the cart.
    pub fn remove_item(&mut self, item_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != item_id);

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotInCart(item_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Wholesale-aware cart total.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes the checkout outcome without touching any storage.
    ///
    /// ## Guards
    /// - The cart must not be empty
    /// - `tendered` must cover the total
    ///
    /// On success the returned [`Sale`] snapshots the cart lines and fixes
    /// the total; the caller persists it, applies the stock decrements and
    /// only then clears the cart.
    pub fn checkout(&self, tendered: Money, cashier_id: &str) -> CoreResult<CheckoutOutcome> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let total = self.total();
        if tendered < total {
            return Err(CoreError::InsufficientPayment { total, tendered });
        }

        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            items: self.items.clone(),
            total_cents: total.cents(),
            timestamp: chrono::Utc::now(),
            cashier_id: cashier_id.to_string(),
        };

        Ok(CheckoutOutcome {
            change: (tendered - total).floor_zero(),
            sale,
        })
    }
}

// =============================================================================
// Checkout Outcome
// =============================================================================

/// Result of a confirmed checkout: the sale to record and the change due.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    pub sale: Sale,
    pub change: Money,
}

// =============================================================================
// Stock Decrement Sweep
// =============================================================================

/// Decrements variant stock across the full catalog for a sale's lines.
///
/// Walks every product and variant; a variant matched by a cart line by
/// `(product_id, variant_id)` loses exactly that line's quantity, every
/// other variant is untouched. The caller rewrites the whole products
/// collection with the result.
pub fn apply_stock_decrements(products: &mut [Product], items: &[CartItem]) {
    for product in products.iter_mut() {
        for variant in product.variants.iter_mut() {
            if let Some(item) = items
                .iter()
                .find(|i| i.product_id == product.id && i.variant_id == variant.id)
            {
                variant.stock -= item.quantity;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Cookie, size=250gr, price 10.00, wholesale 8.00, stock 5,
    /// wholesale threshold 3.
    fn cookie() -> Product {
        Product {
            id: "p-cookie".to_string(),
            name: "Cookie".to_string(),
            variants: vec![ProductVariant {
                id: "v-250".to_string(),
                variant_type: "size".to_string(),
                value: "250gr".to_string(),
                price_cents: 1000,
                wholesale_price_cents: 800,
                stock: 5,
            }],
            min_wholesale_qty: 3,
        }
    }

    fn add_cookie(cart: &mut Cart, product: &Product) {
        let variant = product.variants[0].clone();
        cart.add_variant(product, &variant).unwrap();
    }

    #[test]
    fn test_add_creates_line_with_snapshot() {
        let product = cookie();
        let mut cart = Cart::new();
        add_cookie(&mut cart, &product);

        assert_eq!(cart.item_count(), 1);
        let item = &cart.items[0];
        assert_eq!(item.quantity, 1);
        assert_eq!(item.variant.min_wholesale_qty, 3);
        assert_eq!(item.variant.stock, 5);
    }

    #[test]
    fn test_add_same_variant_increments() {
        let product = cookie();
        let mut cart = Cart::new();
        add_cookie(&mut cart, &product);
        add_cookie(&mut cart, &product);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_add_sold_out_variant_rejected() {
        let mut product = cookie();
        product.variants[0].stock = 0;
        let variant = product.variants[0].clone();

        let mut cart = Cart::new();
        let err = cart.add_variant(&product, &variant).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_beyond_stock_rejected() {
        let product = cookie();
        let mut cart = Cart::new();
        for _ in 0..5 {
            add_cookie(&mut cart, &product);
        }

        let variant = product.variants[0].clone();
        let err = cart.add_variant(&product, &variant).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 5,
                requested: 6,
                ..
            }
        ));
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn test_wholesale_switch_at_threshold() {
        // qty 2 → unit 10.00, subtotal 20.00; qty 3 → unit 8.00, subtotal 24.00
        let product = cookie();
        let mut cart = Cart::new();
        add_cookie(&mut cart, &product);
        add_cookie(&mut cart, &product);

        assert_eq!(cart.items[0].unit_price().cents(), 1000);
        assert_eq!(cart.total().cents(), 2000);

        let id = cart.items[0].id.clone();
        cart.update_quantity(&id, 1).unwrap();

        assert_eq!(cart.items[0].unit_price().cents(), 800);
        assert_eq!(cart.total().cents(), 2400);
    }

    #[test]
    fn test_set_quantity_above_stock_rejected() {
        let product = cookie();
        let mut cart = Cart::new();
        add_cookie(&mut cart, &product);
        let id = cart.items[0].id.clone();
        cart.set_quantity(&id, 5).unwrap();

        let err = cart.set_quantity(&id, 6).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { .. }));
        // Quantity remains unchanged
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn test_decrement_below_one_rejected() {
        let product = cookie();
        let mut cart = Cart::new();
        add_cookie(&mut cart, &product);
        let id = cart.items[0].id.clone();

        let err = cart.update_quantity(&id, -1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityBelowOne { requested: 0 }));
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_remove_item() {
        let product = cookie();
        let mut cart = Cart::new();
        add_cookie(&mut cart, &product);
        let id = cart.items[0].id.clone();

        cart.remove_item(&id).unwrap();
        assert!(cart.is_empty());
        assert!(cart.remove_item(&id).is_err());
    }

    #[test]
    fn test_checkout_empty_cart_rejected() {
        let cart = Cart::new();
        let err = cart.checkout(Money::from_cents(1000), "u1").unwrap_err();
        assert_eq!(err, CoreError::EmptyCart);
    }

    #[test]
    fn test_checkout_insufficient_payment_rejected() {
        let product = cookie();
        let mut cart = Cart::new();
        add_cookie(&mut cart, &product);

        let err = cart.checkout(Money::from_cents(999), "u1").unwrap_err();
        assert!(matches!(err, CoreError::InsufficientPayment { .. }));
    }

    #[test]
    fn test_checkout_exact_payment_zero_change() {
        let product = cookie();
        let mut cart = Cart::new();
        for _ in 0..3 {
            add_cookie(&mut cart, &product);
        }

        // 3 × wholesale 8.00 = 24.00
        let outcome = cart.checkout(Money::from_cents(2400), "u1").unwrap();
        assert_eq!(outcome.change, Money::zero());
        assert_eq!(outcome.sale.total_cents, 2400);
        assert_eq!(outcome.sale.cashier_id, "u1");
        assert_eq!(outcome.sale.item_quantity(), 3);
    }

    #[test]
    fn test_checkout_overpayment_change() {
        let product = cookie();
        let mut cart = Cart::new();
        add_cookie(&mut cart, &product);

        let outcome = cart.checkout(Money::from_cents(1500), "u1").unwrap();
        assert_eq!(outcome.change.cents(), 500);
    }

    #[test]
    fn test_sale_total_matches_wholesale_rule() {
        let product = cookie();
        let mut cart = Cart::new();
        for _ in 0..4 {
            add_cookie(&mut cart, &product);
        }

        let outcome = cart.checkout(Money::from_cents(10000), "u1").unwrap();
        let expected: i64 = outcome
            .sale
            .items
            .iter()
            .map(|i| i.unit_price().cents() * i.quantity)
            .sum();
        assert_eq!(outcome.sale.total_cents, expected);
    }

    #[test]
    fn test_apply_stock_decrements_only_sold_variants() {
        let mut products = vec![
            cookie(),
            Product {
                id: "p-tea".to_string(),
                name: "Tea".to_string(),
                variants: vec![ProductVariant {
                    id: "v-tea".to_string(),
                    variant_type: "taste".to_string(),
                    value: "jasmine".to_string(),
                    price_cents: 500,
                    wholesale_price_cents: 400,
                    stock: 9,
                }],
                min_wholesale_qty: 10,
            },
        ];

        let mut cart = Cart::new();
        let cookie = products[0].clone();
        for _ in 0..3 {
            add_cookie(&mut cart, &cookie);
        }

        apply_stock_decrements(&mut products, &cart.items);

        assert_eq!(products[0].variants[0].stock, 2);
        assert_eq!(products[1].variants[0].stock, 9);
    }
}
