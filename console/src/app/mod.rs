//! # Application Orchestrator
//!
//! The [`App`] struct owns the session, the API handle and the shell state,
//! and hands out screens bound to the same API.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Front end (CLI)                                              │
//! │  - navigate()            - session-guarded route change       │
//! │  - handle_login_click()  - spawns the login request           │
//! │  - on_tick()/next_event()- applies async results              │
//! └───────────────┬──────────────────────────────────────────────┘
//!                 │
//! ┌───────────────▼──────────────────────────────────────────────┐
//! │  App                                                          │
//! │  - state: Arc<RwLock<AppState>>   (route, login form, notices)│
//! │  - session: Arc<dyn SessionStore>                             │
//! │  - api: Arc<dyn AdminApi>                                     │
//! └───────────────┬───────────────────────────▲──────────────────┘
//!                 │ tokio::spawn              │ async_channel
//! ┌───────────────▼───────────────────────────┴──────────────────┐
//! │  Async tasks (login) ─────────▶ AppEvent::LoginResult         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Screens ([`screens`], [`payment`]) keep their own state and are driven
//! directly with `.await`; only the login round-trip goes through the event
//! channel so the login form can show its loading state meanwhile.
//!
//! ## State Management Pattern
//!
//! ```rust,ignore
//! let state = app.state.read(); // Shared read lock
//! render(&state);
//! drop(state); // Lock released before any .await
//! ```
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use admin_console::app::{App, Route};
//! use admin_console::config::ConsoleConfig;
//! use admin_console::core::{MemorySession, SessionStore};
//! use admin_console::services::ApiClient;
//!
//! # async fn run() -> admin_console::core::Result<()> {
//! let session: Arc<dyn SessionStore> = Arc::new(MemorySession::new());
//! let api = Arc::new(ApiClient::new(&ConsoleConfig::default(), session.clone())?);
//! let app = App::new(api, session);
//!
//! app.handle_login_click("admin@shreeaura.in".into(), "secret".into());
//! app.next_event().await;
//!
//! let categories = app.categories_screen();
//! categories.refresh().await?;
//! # Ok(())
//! # }
//! ```

mod events;
mod guard;
mod handlers;
pub mod payment;
pub mod screens;
mod state;

#[cfg(test)]
pub(crate) mod mock;

use std::sync::Arc;

use async_channel::{Receiver, Sender};
use parking_lot::RwLock;

pub use events::AppEvent;
pub use guard::{Navigation, Route, SessionGuard};
pub use payment::{OtpState, PaymentPhase, PaymentState, PaymentWorkflow};
pub use state::*;

use crate::core::error::{AppError, Result};
use crate::core::service::AdminApi;
use crate::core::session::SessionStore;
use screens::{
    BlogScreen, Blogs, Categories, CategoriesScreen, ListScreen, Orders, OrdersScreen, Sellers, SellersScreen,
    ShopByCategoryEntries, ShopByCategoryScreen, ShopByNameEntries, ShopByNameScreen,
};

/// Main application orchestrator
pub struct App {
    pub state: Arc<RwLock<AppState>>,
    pub event_rx: Receiver<AppEvent>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn AdminApi>,
    session: Arc<dyn SessionStore>,
    guard: SessionGuard,
}

impl App {
    /// Create the orchestrator. Starts on the dashboard when a credential is
    /// already stored, on the login route otherwise.
    pub fn new(api: Arc<dyn AdminApi>, session: Arc<dyn SessionStore>) -> Self {
        let (event_tx, event_rx) = async_channel::unbounded();
        let guard = SessionGuard::new(session.clone());

        let state = AppState {
            current_route: guard.check(Route::Dashboard).route().clone(),
            ..AppState::default()
        };

        tracing::debug!(route = %state.current_route.path(), "App initialized");

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            api,
            session,
            guard,
        }
    }

    pub fn api(&self) -> Arc<dyn AdminApi> {
        self.api.clone()
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_route(&self) -> Route {
        self.state.read().current_route.clone()
    }

    /// Move to `route`, or to wherever the session guard redirects.
    pub fn navigate(&self, route: Route) -> Navigation {
        handlers::navigation::handle_navigate(self.state.clone(), &self.guard, route)
    }

    /// Start a login request; the result arrives as [`AppEvent::LoginResult`].
    pub fn handle_login_click(&self, email: String, password: String) {
        handlers::auth::handle_login_click(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
            email,
            password,
        );
    }

    pub fn handle_logout(&self) -> Result<()> {
        handlers::auth::handle_logout(self.state.clone(), &self.session)
    }

    /// Apply one async result to the shell state.
    pub fn handle_event(&self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => {
                handlers::auth::handle_login_result(self.state.clone(), &self.session, result);
            }
            AppEvent::SessionExpired => {
                handlers::auth::handle_session_expired(self.state.clone(), &self.guard);
            }
        }
    }

    /// Apply every pending event without waiting. Returns how many were handled.
    pub fn on_tick(&self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        if processed > 0 {
            tracing::debug!(events_processed = processed, "on_tick: processed events");
        }
        processed
    }

    /// Wait for the next event, apply it, and return a copy.
    pub async fn next_event(&self) -> Option<AppEvent> {
        let event = self.event_rx.recv().await.ok()?;
        self.handle_event(event.clone());
        Some(event)
    }

    /// Surface a screen error: session errors return to login, the rest become notices.
    pub fn report_error(&self, err: &AppError) {
        if err.is_session_error() {
            if let Err(e) = self.event_tx.try_send(AppEvent::SessionExpired) {
                tracing::error!(error = %e, "Failed to queue session expiry");
            }
            self.on_tick();
        } else {
            self.state.write().push_notice(Notice::error(err.to_string()));
        }
    }

    pub fn drain_notices(&self) -> Vec<Notice> {
        self.state.write().drain_notices()
    }

    pub fn categories_screen(&self) -> CategoriesScreen {
        ListScreen::new(Categories, self.api.clone())
    }

    pub fn shop_by_name_screen(&self) -> ShopByNameScreen {
        ListScreen::new(ShopByNameEntries, self.api.clone())
    }

    pub fn shop_by_category_screen(&self) -> ShopByCategoryScreen {
        ListScreen::new(ShopByCategoryEntries, self.api.clone())
    }

    pub fn blog_screen(&self) -> BlogScreen {
        ListScreen::new(Blogs, self.api.clone())
    }

    pub fn orders_screen(&self) -> OrdersScreen {
        ListScreen::new(Orders, self.api.clone())
    }

    pub fn sellers_screen(&self) -> SellersScreen {
        ListScreen::new(Sellers, self.api.clone())
    }

    /// Fresh payment workflow for one seller visit.
    pub fn payment_workflow(&self, seller_id: &str) -> PaymentWorkflow {
        PaymentWorkflow::new(self.api.clone(), seller_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::MemorySession;
    use mock::MockAdminApi;

    fn app_with(session: MemorySession) -> (App, Arc<MockAdminApi>, Arc<dyn SessionStore>) {
        let api = Arc::new(MockAdminApi::new());
        let session: Arc<dyn SessionStore> = Arc::new(session);
        (App::new(api.clone(), session.clone()), api, session)
    }

    #[tokio::test]
    async fn test_starts_on_login_without_token() {
        let (app, _, _) = app_with(MemorySession::new());
        assert_eq!(app.current_route(), Route::Login);

        let nav = app.navigate(Route::Orders);
        assert!(!nav.is_allowed());
        assert_eq!(app.current_route(), Route::Login);
    }

    #[tokio::test]
    async fn test_starts_on_dashboard_with_token() {
        let (app, _, _) = app_with(MemorySession::with_token("stored"));
        assert_eq!(app.current_route(), Route::Dashboard);
        assert!(app.navigate(Route::Sellers).is_allowed());
    }

    #[tokio::test]
    async fn test_login_success_stores_token_and_routes_to_dashboard() {
        let (app, _, session) = app_with(MemorySession::new());

        app.handle_login_click("admin@shreeaura.in".to_string(), "secret".to_string());
        assert!(app.state.read().login.loading);

        let event = app.next_event().await;
        assert!(matches!(event, Some(AppEvent::LoginResult(Ok(_)))));

        assert_eq!(session.token().as_deref(), Some("mock-token"));
        let state = app.state.read();
        assert_eq!(state.current_route, Route::Dashboard);
        assert!(!state.login.loading);
        assert!(state.login.error.is_none());
    }

    #[tokio::test]
    async fn test_login_failure_shows_error() {
        let (app, _, session) = app_with(MemorySession::new());

        app.handle_login_click("admin@shreeaura.in".to_string(), "wrong".to_string());
        app.next_event().await;

        assert!(session.token().is_none());
        let state = app.state.read();
        assert_eq!(state.current_route, Route::Login);
        assert_eq!(state.login.error.as_deref(), Some("Login failed: Invalid credentials"));
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let (app, api, _) = app_with(MemorySession::new());

        app.handle_login_click("  ".to_string(), "secret".to_string());
        assert_eq!(
            app.state.read().login.error.as_deref(),
            Some("Email and password required")
        );
        assert_eq!(app.on_tick(), 0);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (app, _, session) = app_with(MemorySession::with_token("stored"));

        app.handle_logout().unwrap();
        assert!(session.token().is_none());
        assert_eq!(app.current_route(), Route::Login);
        assert!(!app.navigate(Route::Blogs).is_allowed());
    }

    #[tokio::test]
    async fn test_session_error_redirects_to_login() {
        let (app, _, session) = app_with(MemorySession::with_token("stored"));
        app.navigate(Route::Categories);

        // The REST client clears the credential before reporting
        session.clear().unwrap();
        app.report_error(&AppError::SessionExpired);

        assert_eq!(app.current_route(), Route::Login);
        let notices = app.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Session expired. Please login again.");
    }

    #[tokio::test]
    async fn test_other_errors_become_notices() {
        let (app, _, _) = app_with(MemorySession::with_token("stored"));
        app.navigate(Route::Orders);

        app.report_error(&AppError::Network("connection refused".to_string()));
        assert_eq!(app.current_route(), Route::Orders);
        assert!(app.drain_notices()[0].is_error());
    }

    #[tokio::test]
    async fn test_screens_share_the_injected_api() {
        let (app, api, _) = app_with(MemorySession::with_token("stored"));
        *api.categories.lock() = vec![shared::ProductCategory {
            id: 1,
            name: "Sarees".to_string(),
        }];

        let screen = app.categories_screen();
        screen.refresh().await.unwrap();
        assert_eq!(screen.items().len(), 1);
        assert_eq!(api.count("get_all_categories"), 1);
    }
}
