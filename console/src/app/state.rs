//! # Application State Types
//!
//! Shell-level state: the current route, the login form and the notice queue.
//! Screen state (lists, payment workflow) lives with each screen.

use super::guard::Route;

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// Transient notification (toast / inline message)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub error: Option<String>,
    pub loading: bool,
}

/// Shell state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_route: Route,
    pub login: LoginForm,
    /// Pending notices, oldest first
    pub notices: Vec<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_route: Route::Login,
            login: LoginForm::default(),
            notices: Vec::new(),
        }
    }
}

impl AppState {
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Take every pending notice, leaving the queue empty.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
