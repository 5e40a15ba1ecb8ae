//! # ShreeAura Admin Console - Library Root
//!
//! Admin client for the ShreeAura e-commerce platform: product categories,
//! shop-by-name and shop-by-category catalog entries, blog posts, orders, the
//! seller directory, and the OTP-gated seller payment workflow. The binary
//! (`shreeaura-admin`) drives these screens from a terminal.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  cli (clap)           - one subcommand per screen      │
//! ├────────────────────────────────────────────────────────┤
//! │  app                  - orchestrator, session guard,   │
//! │                         list screens, payment workflow │
//! ├────────────────────────────────────────────────────────┤
//! │  core::service        - AdminApi trait                 │
//! │  services::api        - reqwest implementation         │
//! │  core::session        - injected credential store      │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTPS + Bearer token
//!          ▼
//! ┌─────────────────────────┐
//! │  ShreeAura admin API    │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator ([`app::App`]), session guard, list screens and the
//!   seller payment workflow
//! - **cli**: argument parsing and command runners
//! - **config**: environment and flag driven settings
//! - **core**: error type, session store, service traits
//! - **debug**: logging setup and trace ids
//! - **services**: REST client and image uploads
//! - **ui**: plain-text rendering of screens and notices
//!
//! ## Core Concepts
//!
//! ### Re-fetch after mutation
//!
//! Screens never patch their lists locally. Every successful create, update
//! or delete is followed by a full re-fetch.
//!
//! ### Session handling
//!
//! The admin token lives in an injected [`core::SessionStore`]. A 401/403
//! from the API clears it; the next protected navigation lands on the login
//! route.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use admin_console::app::PaymentWorkflow;
//! use admin_console::config::ConsoleConfig;
//! use admin_console::core::{FileSession, SessionStore};
//! use admin_console::services::ApiClient;
//!
//! # async fn pay() -> admin_console::Result<()> {
//! let config = ConsoleConfig::from_env()?;
//! let session: Arc<dyn SessionStore> = Arc::new(FileSession::open(&config.session_file)?);
//! let api = Arc::new(ApiClient::new(&config, session)?);
//!
//! let workflow = PaymentWorkflow::open(api, "42").await?;
//! workflow.send_otp().await?;
//! workflow.verify_otp("1234").await?;
//! workflow.pay().await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;

pub use app::{App, AppEvent, AppState, Route};
pub use core::{AppError, Result};
