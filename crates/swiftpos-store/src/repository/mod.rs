//! # Repositories
//!
//! One repository per collection, each implementing read-modify-write over
//! its whole document:
//!
//! - [`product::ProductRepository`] - catalog CRUD and the checkout rewrite
//! - [`sale::SaleRepository`] - append-only sales ledger
//! - [`user::UserRepository`] - user CRUD, credentials, first-run owner
//! - [`session::SessionRepository`] - the persisted auth session

pub mod product;
pub mod sale;
pub mod session;
pub mod user;
