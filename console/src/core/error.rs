//! # Common Error Types
//!
//! Consolidated error handling for the admin console.
//!
//! This module provides a centralized error type [`AppError`] that covers every
//! failure a screen can surface.
//!
//! ## Error Categories
//!
//! - **Auth / SessionExpired**: Missing credential, rejected login, or a 401/403
//!   from the API. Both end in a redirect to the login route.
//! - **Validation**: Empty required field or non-positive amount, raised before
//!   any network call.
//! - **Api / Network / Decode**: Server, transport and response-shape failures.
//!   Caught per call and surfaced as a notice; never retried.
//! - **State**: Workflow preconditions (busy, wrong phase).
//! - **Io / Config**: Local files and environment.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use admin_console::core::error::AppError;
//!
//! fn validate_amount(amount: f64) -> Result<f64, AppError> {
//!     if amount <= 0.0 {
//!         return Err(AppError::Validation("Enter valid amount".to_string()));
//!     }
//!     Ok(amount)
//! }
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// Nothing in this enum is fatal: every screen returns to its pre-action state
/// after reporting one of these.
#[derive(Debug, Error)]
pub enum AppError {
    /// No credential stored, or the login endpoint rejected the credentials.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The API answered 401/403; the stored credential has been discarded.
    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// Input rejected client-side before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-2xx response with the message normalized from the body.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport failure (DNS, connection refused, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Operation not allowed in the current screen/workflow state.
    #[error("State error: {0}")]
    State(String),

    /// Configuration missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// True for errors that must send the user back to the login route.
    pub fn is_session_error(&self) -> bool {
        matches!(self, AppError::Auth(_) | AppError::SessionExpired)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}
