//! Command runners. Each one goes through the session guard, drives a screen,
//! prints the result and the screen's notices.

pub mod auth;
pub mod blogs;
pub mod catalog;
pub mod orders;
pub mod payments;

use crate::app::{App, Notice, Route};
use crate::core::error::{AppError, Result};
use crate::ui;

/// Message for protected commands run without a stored token
pub const NOT_LOGGED_IN: &str = "Not logged in";

/// Enter `route` or fail when the guard redirects.
pub(crate) fn require(app: &App, route: Route) -> Result<()> {
    let navigation = app.navigate(route);
    if navigation.is_allowed() {
        Ok(())
    } else {
        Err(AppError::Auth(NOT_LOGGED_IN.to_string()))
    }
}

/// Print screen notices and hand session errors to the app, which moves back
/// to the login route.
pub(crate) fn settle<T>(app: &App, notices: Vec<Notice>, result: Result<T>) -> Result<T> {
    ui::show_notices(&notices);
    if let Err(e) = &result {
        if e.is_session_error() {
            app.report_error(e);
        }
    }
    ui::show_notices(&app.drain_notices());
    result
}
