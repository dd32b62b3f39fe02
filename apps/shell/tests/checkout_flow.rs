//! End-to-end flows against a temp-directory store: first-run
//! provisioning, login, the wholesale checkout scenario, role gating and
//! the bootstrap corruption contract.

use tempfile::tempdir;

use swiftpos_core::{Money, Product, ProductVariant, Role};
use swiftpos_shell::{App, Config, ProductForm, Resolution, Route, UserForm};

fn bootstrap(dir: &tempfile::TempDir) -> App {
    App::bootstrap(Some(dir.path().to_path_buf()), Config::default()).unwrap()
}

/// Cookie, size=250gr, price 10.00, wholesale 8.00, stock 5, threshold 3.
fn seed_cookie(app: &App) {
    app.store()
        .inner()
        .products()
        .add(Product {
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
        })
        .unwrap();
}

#[test]
fn first_run_provisions_owner_and_login_works() {
    let dir = tempdir().unwrap();
    let app = bootstrap(&dir);

    // The owner account exists and its credentials work
    let user = app.login("owner", "owner123").unwrap();
    assert_eq!(user.name, "System Owner");
    assert_eq!(user.role, Role::Owner);
    assert!(app.session().is_authenticated());

    // The session survives a restart
    drop(app);
    let app = bootstrap(&dir);
    assert!(app.session().is_authenticated());
    assert_eq!(app.session().user().unwrap().username, "owner");

    // Provisioning is idempotent
    assert_eq!(app.store().inner().users().list().len(), 1);
}

#[test]
fn unknown_user_login_rejected_without_session() {
    let dir = tempdir().unwrap();
    let app = bootstrap(&dir);

    assert!(app.login("ghost", "owner123").is_err());
    assert!(!app.session().is_authenticated());

    // Nothing was persisted either
    drop(app);
    let app = bootstrap(&dir);
    assert!(!app.session().is_authenticated());
}

#[test]
fn wholesale_checkout_scenario() {
    let dir = tempdir().unwrap();
    let app = bootstrap(&dir);
    seed_cookie(&app);
    app.login("owner", "owner123").unwrap();

    let mut cashier = app.cashier();

    // qty 2: normal price 10.00, subtotal 20.00
    cashier.add_to_cart("p-cookie", "v-250").unwrap();
    cashier.add_to_cart("p-cookie", "v-250").unwrap();
    let item = &cashier.cart().items[0];
    assert_eq!(item.unit_price().cents(), 1000);
    assert_eq!(cashier.total().cents(), 2000);

    // qty 3: switches to wholesale 8.00, subtotal 24.00
    let item_id = cashier.cart().items[0].id.clone();
    cashier.update_quantity(&item_id, 1).unwrap();
    assert_eq!(cashier.cart().items[0].unit_price().cents(), 800);
    assert_eq!(cashier.total().cents(), 2400);

    // Checkout with exact payment: accepted, change 0
    cashier.set_payment_input("24");
    let change = cashier.checkout().unwrap();
    assert_eq!(change, Money::zero());

    // Cart cleared, receipt shown with the wholesale price
    assert!(cashier.cart().is_empty());
    let receipt = cashier.receipt().unwrap();
    assert_eq!(receipt.total_cents, 2400);
    assert_eq!(receipt.lines[0].unit_price_cents, 800);
    assert_eq!(receipt.cashier_name, "System Owner");

    // Stock decremented to 2 in the persisted catalog
    let catalog = app.store().inner().products().list();
    assert_eq!(catalog[0].variants[0].stock, 2);

    // The sale is recorded with the fixed total and the cashier id
    let sales = app.store().inner().sales().list();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].total_cents, 2400);
    assert_eq!(sales[0].cashier_id, app.session().user().unwrap().id);
}

#[test]
fn quantity_above_stock_rejected() {
    let dir = tempdir().unwrap();
    let app = bootstrap(&dir);
    seed_cookie(&app);
    app.login("owner", "owner123").unwrap();

    let mut cashier = app.cashier();
    cashier.add_to_cart("p-cookie", "v-250").unwrap();
    let item_id = cashier.cart().items[0].id.clone();
    cashier.set_quantity(&item_id, 5).unwrap();

    // Stock is 5: setting 6 is rejected and the quantity stays put
    assert!(cashier.set_quantity(&item_id, 6).is_err());
    assert_eq!(cashier.cart().items[0].quantity, 5);

    // Clicking the grid again is rejected the same way
    assert!(cashier.add_to_cart("p-cookie", "v-250").is_err());
    assert_eq!(cashier.cart().items[0].quantity, 5);
}

#[test]
fn insufficient_payment_rejected() {
    let dir = tempdir().unwrap();
    let app = bootstrap(&dir);
    seed_cookie(&app);
    app.login("owner", "owner123").unwrap();

    let mut cashier = app.cashier();
    cashier.add_to_cart("p-cookie", "v-250").unwrap();

    cashier.set_payment_input("9.99");
    assert!(!cashier.can_checkout());
    assert!(cashier.checkout().is_err());

    // Nothing persisted, cart intact
    assert_eq!(cashier.cart().item_count(), 1);
    assert!(app.store().inner().sales().list().is_empty());
    assert_eq!(
        app.store().inner().products().list()[0].variants[0].stock,
        5
    );

    // payment >= total is accepted with change = payment - total
    cashier.set_payment_input("10.50");
    assert!(cashier.can_checkout());
    assert_eq!(cashier.checkout().unwrap().cents(), 50);
}

#[test]
fn shopkeeper_cannot_reach_management_routes() {
    let dir = tempdir().unwrap();
    let app = bootstrap(&dir);
    app.login("owner", "owner123").unwrap();

    // Owner creates a shopkeeper account through the management screen
    let mut users = app.user_management();
    let mut form = UserForm::new();
    form.username = "keeper".to_string();
    form.password = "keeper1".to_string();
    form.name = "Keeper".to_string();
    form.role = Role::Shopkeeper;
    users.save(&form).unwrap();

    app.logout().unwrap();
    app.login("keeper", "keeper1").unwrap();

    // Navigation is filtered down to the cashier page
    let items: Vec<Route> = app.nav_items().iter().map(|i| i.route).collect();
    assert_eq!(items, vec![Route::Cashier]);

    // Direct access to gated routes redirects instead of rendering
    for route in [Route::Products, Route::Sales, Route::Users] {
        assert_eq!(app.navigate(route), Resolution::Redirect(Route::Cashier));
    }
    assert_eq!(app.navigate(Route::Cashier), Resolution::Render(Route::Cashier));
}

#[test]
fn signed_out_navigation_redirects_to_login() {
    let dir = tempdir().unwrap();
    let app = bootstrap(&dir);

    assert!(app.nav_items().is_empty());
    assert_eq!(
        app.navigate(Route::Cashier),
        Resolution::Redirect(Route::Login)
    );
    assert_eq!(app.navigate(Route::Login), Resolution::Render(Route::Login));
}

#[test]
fn product_form_feeds_the_cashier_grid() {
    let dir = tempdir().unwrap();
    let app = bootstrap(&dir);
    app.login("owner", "owner123").unwrap();

    let mut management = app.product_management();
    let mut form = ProductForm::new();
    form.name = "Tea".to_string();
    form.min_wholesale_qty = "10".to_string();
    form.draft.variant_type = "Taste".to_string();
    form.draft.value = "jasmine".to_string();
    form.draft.price = "5".to_string();
    form.draft.wholesale_price = "4".to_string();
    form.draft.stock = "9".to_string();
    form.add_variant().unwrap();
    management.save(&form).unwrap();

    let cashier = app.cashier();
    assert_eq!(cashier.products().len(), 1);
    let product = &cashier.products()[0];
    assert_eq!(product.name, "Tea");
    // Free-text type entry was normalized on save
    assert_eq!(product.variants[0].variant_type, "taste");
    assert_eq!(product.variants[0].stock, 9);
}

#[test]
fn corrupt_products_document_fails_bootstrap_but_not_screens() {
    let dir = tempdir().unwrap();

    // Healthy bootstrap first, then the document goes bad
    let app = bootstrap(&dir);
    app.store()
        .inner()
        .write_document("products", "{definitely not json")
        .unwrap();

    // Screen loaders fall back to the empty catalog
    let cashier = app.cashier();
    assert!(cashier.products().is_empty());

    // Bootstrap treats the same document as a hard failure
    let err = App::bootstrap(Some(dir.path().to_path_buf()), Config::default()).unwrap_err();
    assert_eq!(err.code, swiftpos_shell::ErrorCode::StorageError);
}

#[test]
fn deleting_a_product_keeps_recorded_sales() {
    let dir = tempdir().unwrap();
    let app = bootstrap(&dir);
    seed_cookie(&app);
    app.login("owner", "owner123").unwrap();

    let mut cashier = app.cashier();
    cashier.add_to_cart("p-cookie", "v-250").unwrap();
    cashier.set_payment_input("10");
    cashier.checkout().unwrap();

    let mut management = app.product_management();
    management.delete("p-cookie").unwrap();
    assert!(management.products().is_empty());

    // The ledger still shows the sale with its frozen snapshot
    let ledger = app.sales_ledger();
    let filtered = ledger.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].sale.items[0].name, "Cookie");
    assert_eq!(filtered[0].sale.total_cents, 1000);
}
