//! # Session Guard
//!
//! Navigation is gated on a single predicate: is a credential stored? There is
//! no client-side expiry check. When the REST client sees a 401/403 it clears
//! the credential, and the next protected navigation lands on [`Route::Login`].

use std::sync::Arc;

use crate::core::session::SessionStore;

/// Console routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Categories,
    ShopByName,
    ShopByCategory,
    Blogs,
    Orders,
    Sellers,
    /// Payment workflow for one seller
    SellerPayment(String),
}

impl Route {
    /// URL-style path, as shown in the header and logs
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/".to_string(),
            Route::Categories => "/category".to_string(),
            Route::ShopByName => "/shopbyname".to_string(),
            Route::ShopByCategory => "/shopbycategory".to_string(),
            Route::Blogs => "/blogs".to_string(),
            Route::Orders => "/admin/orders".to_string(),
            Route::Sellers => "/admin/sellers".to_string(),
            Route::SellerPayment(id) => format!("/admin/payments/{}", id),
        }
    }

    /// Screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "ShreeAura Admin Login",
            Route::Dashboard => "Welcome to ShreeAura Admin",
            Route::Categories => "Manage Product Categories",
            Route::ShopByName => "Manage Shop By Name",
            Route::ShopByCategory => "Shop By Category",
            Route::Blogs => "Blog Management",
            Route::Orders => "All Orders",
            Route::Sellers => "All Sellers",
            Route::SellerPayment(_) => "Seller Payments",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Parse a path produced by [`Route::path`].
    pub fn from_path(path: &str) -> Option<Route> {
        let route = match path {
            "/login" => Route::Login,
            "/" => Route::Dashboard,
            "/category" => Route::Categories,
            "/shopbyname" => Route::ShopByName,
            "/shopbycategory" => Route::ShopByCategory,
            "/blogs" => Route::Blogs,
            "/admin/orders" => Route::Orders,
            "/admin/sellers" => Route::Sellers,
            other => {
                let id = other.strip_prefix("/admin/payments/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Route::SellerPayment(id.to_string())
            }
        };
        Some(route)
    }
}

/// Outcome of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Allowed(Route),
    Redirected { requested: Route, to: Route },
}

impl Navigation {
    /// Route that ends up displayed
    pub fn route(&self) -> &Route {
        match self {
            Navigation::Allowed(route) => route,
            Navigation::Redirected { to, .. } => to,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Navigation::Allowed(_))
    }
}

/// Credential-presence gate
#[derive(Clone)]
pub struct SessionGuard {
    session: Arc<dyn SessionStore>,
}

impl SessionGuard {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }

    /// Decide where a navigation to `route` ends up.
    ///
    /// Protected routes without a credential go to the login route; the login
    /// route with a credential goes to the dashboard.
    pub fn check(&self, route: Route) -> Navigation {
        let authenticated = self.session.is_authenticated();

        if route.requires_auth() && !authenticated {
            tracing::info!(requested = %route.path(), "Access denied, redirecting to login");
            return Navigation::Redirected {
                requested: route,
                to: Route::Login,
            };
        }

        if route == Route::Login && authenticated {
            tracing::debug!("Already logged in, redirecting to dashboard");
            return Navigation::Redirected {
                requested: route,
                to: Route::Dashboard,
            };
        }

        Navigation::Allowed(route)
    }
}
