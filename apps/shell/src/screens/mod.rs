//! # Screens
//!
//! One view-model per page. Screen methods are the UI event handlers:
//! every mutation runs synchronously, rewrites the owning collection and
//! leaves the screen's in-memory state matching what was persisted.
//!
//! - [`cashier::CashierScreen`] - catalog grid, cart, payment, receipt
//! - [`products::ProductManagementScreen`] - catalog CRUD with the form dialog
//! - [`sales::SalesLedgerScreen`] - read-only filter/search over sales
//! - [`users::UserManagementScreen`] - user CRUD with role assignment

pub mod cashier;
pub mod products;
pub mod sales;
pub mod users;

pub use cashier::CashierScreen;
pub use products::{ProductForm, ProductManagementScreen};
pub use sales::{LedgerTotals, SalesLedgerScreen};
pub use users::{UserForm, UserManagementScreen};
