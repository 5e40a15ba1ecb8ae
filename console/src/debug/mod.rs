//! # Logging and Tracing Infrastructure
//!
//! - **File-based logging**: structured logs to `<log dir>/admin-console.log.<date>`
//!   (daily rotation, non-blocking writer)
//! - **Verbose mode**: the same events mirrored to stderr
//! - **Trace IDs**: one span per command run
//! - **Panic hook**: panics are logged with location and backtrace
//!
//! ## Usage
//!
//! ```rust,no_run
//! use admin_console::config::ConsoleConfig;
//! use admin_console::debug;
//!
//! let config = ConsoleConfig::default();
//! let _guard = debug::init_logger(&config, false);
//!
//! tracing::info!(endpoint = "/admin/get-all-orders", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! - `RUST_LOG`: Log level filter (e.g., `admin_console=debug,info`)
//! - `SHREEAURA_LOG_DIR`: Log directory

pub mod logger;
pub mod trace_context;

pub use logger::{init as init_logger, LogGuard};
pub use trace_context::{command_span, new_trace_id};
