//! # Application Events
//!
//! Results of spawned async tasks, delivered back to the orchestrator.

/// Async task results sent to the orchestrator
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed: the bearer token, or a display message
    LoginResult(Result<String, String>),
    /// The API rejected the stored credential
    SessionExpired,
}
