//! # Console Configuration
//!
//! Settings are read from environment variables (a `.env` file in the working
//! directory is loaded first by `main`). Command-line flags override them, and
//! the result is validated before any client is built.
//!
//! | Variable                  | Default                                  |
//! |---------------------------|------------------------------------------|
//! | `SHREEAURA_API_URL`       | `https://api.shreeaura.in`               |
//! | `SHREEAURA_TIMEOUT_SECS`  | `10`                                     |
//! | `SHREEAURA_SESSION_FILE`  | `<data dir>/shreeaura-admin/session.token` |
//! | `SHREEAURA_LOG_DIR`       | `<data dir>/shreeaura-admin/logs`        |
//! | `RUST_LOG`                | `admin_console=info,warn`                |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};

/// Production API host
pub const DEFAULT_API_URL: &str = "https://api.shreeaura.in";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "admin_console=info,warn";
const APP_DIR: &str = "shreeaura-admin";

/// Console configuration.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    /// Base URL of the admin API, without trailing slash
    pub api_base_url: String,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// Where the admin bearer token is persisted between runs
    pub session_file: PathBuf,

    /// Directory for rolling log files
    pub log_dir: PathBuf,

    /// `tracing` filter directive
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: data_dir.join("session.token"),
            log_dir: data_dir.join("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = env::var("SHREEAURA_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let request_timeout = match env::var("SHREEAURA_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.trim().parse().map_err(|e| {
                AppError::Config(format!("SHREEAURA_TIMEOUT_SECS must be a whole number of seconds: {}", e))
            })?),
            Err(_) => defaults.request_timeout,
        };

        let session_file = env::var("SHREEAURA_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.session_file);

        let log_dir = env::var("SHREEAURA_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);

        Ok(Self {
            api_base_url,
            request_timeout,
            session_file,
            log_dir,
            log_level,
        })
    }

    /// Override the API base URL (command-line flag).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the session file (command-line flag).
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("https://") || self.api_base_url.starts_with("http://")) {
            return Err(AppError::Config(format!(
                "API URL must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }

        let secs = self.request_timeout.as_secs();
        if !(1..=300).contains(&secs) {
            return Err(AppError::Config(
                "Request timeout must be between 1 and 300 seconds".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
