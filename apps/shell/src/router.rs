//! # Role-Gated Router
//!
//! Route declarations, per-route role sets and the redirect rules.
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Route      Path        Allowed Roles                                   │
//! │  ─────      ────        ─────────────                                   │
//! │  Login      /login      (public)                                        │
//! │  Cashier    /           Owner, StoreManager, Shopkeeper                 │
//! │  Products   /products   Owner, StoreManager                             │
//! │  Sales      /sales      Owner, StoreManager                             │
//! │  Users      /users      Owner                                           │
//! │                                                                         │
//! │  Unauthenticated access to a protected route redirects to Login.        │
//! │  An authenticated user on a disallowed route redirects to Cashier       │
//! │  instead of rendering it.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use swiftpos_core::Role;

use crate::state::AuthSession;

// =============================================================================
// Routes
// =============================================================================

/// The application's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Cashier,
    Products,
    Sales,
    Users,
}

impl Route {
    /// Routes that appear in the navigation rail, in display order.
    pub const NAVIGABLE: [Route; 4] = [Route::Cashier, Route::Products, Route::Sales, Route::Users];

    /// The route's path.
    pub const fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Cashier => "/",
            Route::Products => "/products",
            Route::Sales => "/sales",
            Route::Users => "/users",
        }
    }

    /// Navigation label.
    pub const fn label(&self) -> &'static str {
        match self {
            Route::Login => "Masuk",
            Route::Cashier => "Kasir",
            Route::Products => "Produk",
            Route::Sales => "Penjualan",
            Route::Users => "Pengguna",
        }
    }

    /// The explicit role set allowed on this route.
    pub const fn allowed_roles(&self) -> &'static [Role] {
        match self {
            // Login is reachable without a session
            Route::Login => &Role::ALL,
            Route::Cashier => &Role::ALL,
            Route::Products | Route::Sales => &[Role::Owner, Role::StoreManager],
            Route::Users => &[Role::Owner],
        }
    }

    /// Whether `role` may render this route.
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}

// =============================================================================
// Navigation Items
// =============================================================================

/// One entry in the navigation rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

/// Navigation items visible to `role`, in display order.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    Route::NAVIGABLE
        .iter()
        .filter(|route| route.allows(role))
        .map(|route| NavItem {
            route: *route,
            label: route.label(),
        })
        .collect()
}

// =============================================================================
// Resolution
// =============================================================================

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Render the requested route.
    Render(Route),
    /// Direct access to a disallowed route: go elsewhere instead.
    Redirect(Route),
}

/// Resolves a navigation attempt against the current session.
pub fn resolve(session: &AuthSession, requested: Route) -> Resolution {
    if requested == Route::Login {
        return Resolution::Render(Route::Login);
    }

    let role = match session.role() {
        Some(role) => role,
        None => return Resolution::Redirect(Route::Login),
    };

    if requested.allows(role) {
        Resolution::Render(requested)
    } else {
        Resolution::Redirect(Route::Cashier)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
