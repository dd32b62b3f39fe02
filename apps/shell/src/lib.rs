//! # SwiftPOS Shell
//!
//! The application shell: bootstrap, explicit state objects, role-gated
//! routing and the four screens.
//!
//! ## Module Organization
//! ```text
//! swiftpos_shell/
//! ├── lib.rs          ◄─── You are here (bootstrap & wiring)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── auth.rs     ◄─── Observable auth session
//! │   ├── store.rs    ◄─── Store handle wrapper
//! │   └── config.rs   ◄─── Display configuration
//! ├── screens/
//! │   ├── cashier.rs  ◄─── Catalog grid, cart, checkout, receipt
//! │   ├── products.rs ◄─── Catalog CRUD + form dialog
//! │   ├── sales.rs    ◄─── Sales ledger filters/totals
//! │   └── users.rs    ◄─── User CRUD
//! ├── router.rs       ◄─── Role-gated routes and redirects
//! ├── receipt.rs      ◄─── Printable receipt view
//! └── error.rs        ◄─── App error type for screen results
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Resolve Data Directory ───────────────────────────────────────────► │
//! │     • Explicit path, or the platform project-directories location       │
//! │                                                                         │
//! │  3. Open & Verify the Document Store ─────────────────────────────────► │
//! │     • Corrupt JSON here is a HARD failure (top-level fallback);         │
//! │       the same document would read as empty from a screen loader        │
//! │                                                                         │
//! │  4. Provision & Restore ──────────────────────────────────────────────► │
//! │     • First run with no users document: create owner/owner123           │
//! │     • Restore the persisted session into the AuthSession                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod receipt;
pub mod router;
pub mod screens;
pub mod state;

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use swiftpos_store::{LocalStore, StorageUsage, StoreConfig};

pub use error::{AppError, ErrorCode};
pub use receipt::Receipt;
pub use router::{nav_items, resolve, NavItem, Resolution, Route};
pub use screens::{
    CashierScreen, ProductForm, ProductManagementScreen, SalesLedgerScreen, UserForm,
    UserManagementScreen,
};
pub use state::{AuthSession, Config, StoreState};

/// Initializes tracing with an env-filter.
///
/// Default level is INFO; override with `RUST_LOG`. Safe to call more than
/// once (later calls are no-ops).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// =============================================================================
// App
// =============================================================================

/// The bootstrapped application: store handle, observable session and
/// display configuration, handed to the screens explicitly.
#[derive(Debug, Clone)]
pub struct App {
    store: StoreState,
    session: AuthSession,
    config: Config,
}

impl App {
    /// Bootstraps the application.
    ///
    /// Opens the store at `data_dir` (or the platform data directory),
    /// strict-verifies every collection document, provisions the default
    /// owner on first run and restores the persisted session.
    ///
    /// ## Errors
    /// A corrupt collection document fails bootstrap; screens opened later
    /// treat the same document as empty.
    pub fn bootstrap(data_dir: Option<PathBuf>, config: Config) -> Result<App, AppError> {
        let root = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        info!(data_dir = %root.display(), "Bootstrapping SwiftPOS");

        let store = LocalStore::open(StoreConfig::new(root))?;
        store.verify_documents()?;

        store.users().ensure_default_owner()?;
        let session = AuthSession::new(store.session().load()?);

        Ok(App {
            store: StoreState::new(store),
            session,
            config,
        })
    }

    /// The store state object.
    pub fn store(&self) -> &StoreState {
        &self.store
    }

    /// The observable auth session.
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Display configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Storage usage for the navigation gauge.
    pub fn usage(&self) -> StorageUsage {
        self.store.usage()
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    /// Logs in against the users collection and persists the session.
    pub fn login(&self, username: &str, password: &str) -> Result<swiftpos_core::User, AppError> {
        self.session.login(self.store.inner(), username, password)
    }

    /// Logs out and clears the persisted session.
    pub fn logout(&self) -> Result<(), AppError> {
        self.session.logout(self.store.inner())
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Resolves a navigation attempt against the current session.
    pub fn navigate(&self, route: Route) -> Resolution {
        router::resolve(&self.session, route)
    }

    /// Navigation items for the signed-in user; empty when signed out.
    pub fn nav_items(&self) -> Vec<NavItem> {
        self.session
            .role()
            .map(router::nav_items)
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Screens
    // -------------------------------------------------------------------------

    /// Opens the cashier screen.
    pub fn cashier(&self) -> CashierScreen {
        CashierScreen::open(
            self.store.inner().clone(),
            self.session.clone(),
            self.config.clone(),
        )
    }

    /// Opens the product management screen.
    pub fn product_management(&self) -> ProductManagementScreen {
        ProductManagementScreen::open(self.store.inner().clone())
    }

    /// Opens the sales ledger screen.
    pub fn sales_ledger(&self) -> SalesLedgerScreen {
        SalesLedgerScreen::open(self.store.inner(), self.config.clone())
    }

    /// Opens the user management screen.
    pub fn user_management(&self) -> UserManagementScreen {
        UserManagementScreen::open(self.store.inner().clone())
    }
}

/// The platform data directory for SwiftPOS.
fn default_data_dir() -> Result<PathBuf, AppError> {
    ProjectDirs::from("com", "swiftpos", "SwiftPOS")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AppError::storage("Could not resolve a data directory"))
}
