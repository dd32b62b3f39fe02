//! # Cashier Screen
//!
//! The checkout page: catalog grid, cart, payment entry and receipt.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Confirmed Checkout                                   │
//! │                                                                         │
//! │  1. Parse tendered amount, compute total, validate payment >= total     │
//! │  2. Rewrite the FULL products collection with decremented stock         │
//! │  3. Rewrite the FULL sales collection with the new sale appended        │
//! │  4. Clear cart state and show the receipt view                          │
//! │                                                                         │
//! │  The two writes are not atomic: an interruption between (2) and (3)     │
//! │  leaves stock decremented with no recorded sale. There is no rollback   │
//! │  and no detection.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use swiftpos_core::{apply_stock_decrements, Cart, Money, Product};
use swiftpos_store::LocalStore;

use crate::error::AppError;
use crate::receipt::{resolve_cashier_name, Receipt};
use crate::state::{AuthSession, Config};

// =============================================================================
// Change Preview
// =============================================================================

/// Result of the "calculate change" action, before checkout is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangePreview {
    pub total: Money,
    pub tendered: Money,
    /// `tendered - total`, floored at zero for display.
    pub change: Money,
    /// Amount still missing when the payment does not cover the total.
    pub shortfall: Money,
    pub sufficient: bool,
}

// =============================================================================
// Cashier Screen
// =============================================================================

/// The cashier page state.
///
/// The catalog is loaded once when the screen opens; cart guards run
/// against that copy, and a confirmed checkout rewrites it with the
/// decremented stock. Cart items live only here and are discarded on
/// checkout or navigation away.
#[derive(Debug)]
pub struct CashierScreen {
    store: LocalStore,
    session: AuthSession,
    config: Config,
    products: Vec<Product>,
    cart: Cart,
    payment_input: String,
    receipt: Option<Receipt>,
    change_due: Option<Money>,
}

impl CashierScreen {
    /// Opens the cashier screen, loading the catalog.
    ///
    /// A missing or corrupt products document renders an empty grid.
    pub fn open(store: LocalStore, session: AuthSession, config: Config) -> Self {
        let products = store.products().list();
        CashierScreen {
            store,
            session,
            config,
            products,
            cart: Cart::new(),
            payment_input: String::new(),
            receipt: None,
            change_due: None,
        }
    }

    /// The catalog as currently held by this screen.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Reloads the catalog from the store.
    pub fn reload_products(&mut self) {
        self.products = self.store.products().list();
    }

    /// The in-progress cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Wholesale-aware cart total.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    // -------------------------------------------------------------------------
    // Cart event handlers
    // -------------------------------------------------------------------------

    /// Click on a variant in the grid: add one unit to the cart.
    pub fn add_to_cart(&mut self, product_id: &str, variant_id: &str) -> Result<(), AppError> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| AppError::not_found("Product", product_id))?;
        let variant = product
            .variant(variant_id)
            .ok_or_else(|| AppError::not_found("Variant", variant_id))?;

        self.cart.add_variant(product, variant)?;
        Ok(())
    }

    /// +/- buttons on a cart line.
    pub fn update_quantity(&mut self, item_id: &str, delta: i64) -> Result<(), AppError> {
        self.cart.update_quantity(item_id, delta)?;
        Ok(())
    }

    /// Direct quantity input on a cart line.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) -> Result<(), AppError> {
        self.cart.set_quantity(item_id, quantity)?;
        Ok(())
    }

    /// Remove button on a cart line.
    pub fn remove_item(&mut self, item_id: &str) -> Result<(), AppError> {
        self.cart.remove_item(item_id)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Payment entry
    // -------------------------------------------------------------------------

    /// Keystroke handler for the tender field.
    ///
    /// Only digits and at most one decimal point are accepted; any other
    /// input leaves the field unchanged.
    pub fn set_payment_input(&mut self, input: &str) {
        let valid =
            input.chars().all(|c| c.is_ascii_digit() || c == '.') && input.matches('.').count() <= 1;
        if valid {
            self.payment_input = input.to_string();
        }
    }

    /// Current contents of the tender field.
    pub fn payment_input(&self) -> &str {
        &self.payment_input
    }

    /// Parses the tender field into Money.
    pub fn payment(&self) -> Result<Money, AppError> {
        self.payment_input
            .parse()
            .map_err(|_| AppError::validation("Jumlah pembayaran tidak valid"))
    }

    /// The "calculate change" action.
    pub fn change_preview(&self) -> Result<ChangePreview, AppError> {
        let tendered = self.payment()?;
        let total = self.total();
        Ok(ChangePreview {
            total,
            tendered,
            change: (tendered - total).floor_zero(),
            shortfall: (total - tendered).floor_zero(),
            sufficient: tendered >= total,
        })
    }

    /// Whether the checkout button is enabled.
    pub fn can_checkout(&self) -> bool {
        !self.cart.is_empty()
            && self
                .payment()
                .map(|tendered| tendered >= self.total())
                .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Confirms the sale. Returns the change due.
    ///
    /// Requires an authenticated session: the signed-in user is recorded as
    /// the sale's cashier.
    pub fn checkout(&mut self) -> Result<Money, AppError> {
        let cashier = self
            .session
            .user()
            .ok_or_else(|| AppError::auth("No active session"))?;
        let tendered = self.payment()?;

        let outcome = self.cart.checkout(tendered, &cashier.id)?;

        // Side-effect ordering: products first, then the sale, then local
        // state. See the module docs for the (absent) atomicity guarantee.
        let mut products = self.products.clone();
        apply_stock_decrements(&mut products, &outcome.sale.items);
        self.store.products().save_all(&products)?;
        self.store.sales().append(&outcome.sale)?;

        self.products = products;
        self.cart.clear();
        self.payment_input.clear();

        let cashier_name = resolve_cashier_name(&self.store.users().list(), &cashier.id);
        self.receipt = Some(Receipt::from_sale(&outcome.sale, cashier_name, &self.config));
        self.change_due = Some(outcome.change);

        info!(
            sale_id = %outcome.sale.id,
            total = %outcome.sale.total(),
            change = %outcome.change,
            cashier = %cashier.username,
            "Checkout completed"
        );

        Ok(outcome.change)
    }

    /// The receipt from the last checkout, until dismissed.
    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    /// Change due from the last checkout, until dismissed.
    pub fn change_due(&self) -> Option<Money> {
        self.change_due
    }

    /// Dismisses the receipt view.
    pub fn close_receipt(&mut self) {
        self.receipt = None;
        self.change_due = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use swiftpos_core::{AuthState, ProductVariant, Role, User};
    use swiftpos_store::StoreConfig;
    use tempfile::tempdir;

    fn seeded_screen(dir: &tempfile::TempDir) -> CashierScreen {
        let store = LocalStore::open(StoreConfig::new(dir.path())).unwrap();
        store
            .products()
            .add(Product {
                id: "p1".to_string(),
                name: "Cookie".to_string(),
                variants: vec![ProductVariant {
                    id: "v1".to_string(),
                    variant_type: "size".to_string(),
                    value: "250gr".to_string(),
                    price_cents: 1000,
                    wholesale_price_cents: 800,
                    stock: 5,
                }],
                min_wholesale_qty: 3,
            })
            .unwrap();

        let session = AuthSession::new(AuthState::signed_in(User {
            id: "u1".to_string(),
            username: "alice".to_string(),
            password: "p".to_string(),
            name: "Alice".to_string(),
            role: Role::Shopkeeper,
        }));

        CashierScreen::open(store, session, Config::default())
    }

    #[test]
    fn test_payment_input_mask() {
        let dir = tempdir().unwrap();
        let mut screen = seeded_screen(&dir);

        screen.set_payment_input("24.5");
        assert_eq!(screen.payment_input(), "24.5");

        // Rejected inputs leave the field unchanged
        screen.set_payment_input("24.5a");
        assert_eq!(screen.payment_input(), "24.5");
        screen.set_payment_input("24.5.0");
        assert_eq!(screen.payment_input(), "24.5");
    }

    #[test]
    fn test_change_preview_reports_shortfall() {
        let dir = tempdir().unwrap();
        let mut screen = seeded_screen(&dir);
        screen.add_to_cart("p1", "v1").unwrap();

        screen.set_payment_input("8");
        let preview = screen.change_preview().unwrap();
        assert!(!preview.sufficient);
        assert_eq!(preview.shortfall.cents(), 200);
        assert_eq!(preview.change, Money::zero());
        assert!(!screen.can_checkout());

        screen.set_payment_input("15");
        let preview = screen.change_preview().unwrap();
        assert!(preview.sufficient);
        assert_eq!(preview.change.cents(), 500);
        assert!(screen.can_checkout());
    }

    #[test]
    fn test_checkout_requires_session() {
        let dir = tempdir().unwrap();
        let store = LocalStore::open(StoreConfig::new(dir.path())).unwrap();
        let session = AuthSession::new(AuthState::signed_out());
        let mut screen = CashierScreen::open(store, session, Config::default());

        screen.set_payment_input("10");
        let err = screen.checkout().unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::AuthError);
    }

    #[test]
    fn test_failed_checkout_persists_nothing() {
        let dir = tempdir().unwrap();
        let mut screen = seeded_screen(&dir);
        screen.add_to_cart("p1", "v1").unwrap();

        screen.set_payment_input("5");
        assert!(screen.checkout().is_err());

        // Cart intact, stock untouched, no sale recorded
        assert_eq!(screen.cart().item_count(), 1);
        assert_eq!(screen.store.products().list()[0].variants[0].stock, 5);
        assert!(screen.store.sales().list().is_empty());
    }
}
