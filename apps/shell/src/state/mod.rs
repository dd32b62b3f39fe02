//! # State Module
//!
//! Explicit application state objects, passed into the screens rather than
//! reached through any implicit global.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  StoreState  │  │ AuthSession  │  │     Config       │              │
//! │  │              │  │              │  │                  │              │
//! │  │  LocalStore  │  │  AuthState + │  │  store name      │              │
//! │  │  handle      │  │  observers   │  │  currency        │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  AuthSession notifies subscribers on every login/logout so views can    │
//! │  re-render instead of polling a shared global.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod config;
mod store;

pub use auth::AuthSession;
pub use config::Config;
pub use store::StoreState;
