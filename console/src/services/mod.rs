//! # Services Module
//!
//! External service integrations for the admin console.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/       - ShreeAura admin REST client
//! │                (login, catalog, blogs, orders, sellers, payments)
//! └── upload.rs  - Image files for multipart uploads
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │          Screens / Payment workflow          │
//! │                     │                        │
//! │            Arc<dyn AdminApi>                 │
//! │                     │                        │
//! │  ┌──────────────────▼───────────────────┐    │
//! │  │  ApiClient ── Arc<dyn SessionStore>  │    │
//! │  └──────────────────┬───────────────────┘    │
//! └─────────────────────┼────────────────────────┘
//!                       │ HTTPS, Bearer token
//!                       ▼
//!          ┌──────────────────────────┐
//!          │  api.shreeaura.in        │
//!          │  /auth/admin-login       │
//!          │  /admin/*                │
//!          └──────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! All client calls return [`crate::core::Result`]. A 401/403 from any endpoint
//! clears the stored credential and yields [`crate::core::AppError::SessionExpired`].

pub mod api;
pub mod upload;

pub use api::ApiClient;
pub use upload::ImageUpload;
