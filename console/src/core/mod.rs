//! # Core Abstractions
//!
//! Core traits and error types shared by every layer of the console.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: The [`AdminApi`] trait every screen depends on
//! - **[`session`]**: Injected credential storage ([`SessionStore`])
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use admin_console::core::{AdminApi, MemorySession, SessionStore};
//! use admin_console::services::api::ApiClient;
//!
//! // In production: real client over a file-backed session
//! let session: Arc<dyn SessionStore> = Arc::new(MemorySession::new());
//! let api: Arc<dyn AdminApi> = Arc::new(ApiClient::new(&config, session.clone())?);
//!
//! // In tests: scripted mock
//! let api: Arc<dyn AdminApi> = Arc::new(MockAdminApi::default());
//! ```

pub mod error;
pub mod service;
pub mod session;

pub use error::{AppError, Result};
pub use service::AdminApi;
pub use session::{FileSession, MemorySession, SessionStore};
