//! # Navigation Handlers
//!
//! Route changes, always through the session guard.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::guard::{Navigation, Route, SessionGuard};
use crate::app::state::AppState;

/// Handle route change with authentication guard
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn handle_navigate(
    state: Arc<RwLock<AppState>>,
    guard: &SessionGuard,
    route: Route,
) -> Navigation {
    let navigation = guard.check(route);
    let mut state = state.write();
    state.current_route = navigation.route().clone();
    tracing::debug!(route = %state.current_route.path(), allowed = navigation.is_allowed(), "Navigated");
    navigation
}
