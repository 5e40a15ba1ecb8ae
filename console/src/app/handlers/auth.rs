//! # Authentication Handlers
//!
//! Handlers for login, logout, and session expiry.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::guard::{Route, SessionGuard};
use crate::app::state::{AppState, Notice};
use crate::core::error::Result;
use crate::core::service::AdminApi;
use crate::core::session::SessionStore;

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn AdminApi>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    let email = email.trim().to_string();
    if email.is_empty() || password.is_empty() {
        let mut state = state.write();
        state.login.error = Some("Email and password required".to_string());
        return;
    }

    {
        let mut state = state.write();
        if state.login.loading {
            tracing::debug!("Login already in progress, ignoring click");
            return;
        }
        state.login.email = email.clone();
        state.login.error = None;
        state.login.loading = true;
    }

    tokio::spawn(async move {
        let result = api
            .admin_login(&email, &password)
            .await
            .map_err(|e| match e {
                crate::core::AppError::Auth(msg) => msg,
                other => other.to_string(),
            });
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Apply a finished login attempt.
pub(crate) fn handle_login_result(
    state: Arc<RwLock<AppState>>,
    session: &Arc<dyn SessionStore>,
    result: std::result::Result<String, String>,
) {
    let mut state = state.write();
    state.login.loading = false;

    match result {
        Ok(token) => match session.set_token(&token) {
            Ok(()) => {
                tracing::info!(email = %state.login.email, "Admin logged in");
                state.login.error = None;
                state.current_route = Route::Dashboard;
                state.push_notice(Notice::success("Logged in"));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to store admin token");
                state.login.error = Some(format!("Could not store session: {}", e));
            }
        },
        Err(message) => {
            tracing::warn!(error = %message, "Admin login rejected");
            state.login.error = Some(message);
        }
    }
}

/// Discard the stored credential and return to the login route.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>, session: &Arc<dyn SessionStore>) -> Result<()> {
    let cleared = session.clear()?;
    let mut state = state.write();
    state.current_route = Route::Login;
    state.login = Default::default();
    if cleared {
        tracing::info!("Admin logged out");
        state.push_notice(Notice::info("Logged out"));
    }
    Ok(())
}

/// React to a 401/403 reported by the REST client.
///
/// The client has already cleared the credential; re-running the guard on the
/// current route sends protected screens to the login route.
pub(crate) fn handle_session_expired(state: Arc<RwLock<AppState>>, guard: &SessionGuard) {
    let mut state = state.write();
    let current = state.current_route.clone();
    let navigation = guard.check(current);
    state.current_route = navigation.route().clone();
    state.push_notice(Notice::error("Session expired. Please login again."));
}
