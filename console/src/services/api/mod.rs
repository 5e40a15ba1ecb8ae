//! # Admin API Client Module
//!
//! HTTP client for the ShreeAura admin REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient, bearer auth, body normalization
//! ├── auth.rs      - Admin login
//! ├── catalog.rs   - Categories, shop-by-name, shop-by-category
//! ├── blog.rs      - Blog CRUD
//! ├── orders.rs    - Order listing
//! ├── sellers.rs   - Seller directory
//! └── payments.rs  - Balances, payment OTP, payouts and receipts
//! ```

pub mod auth;
pub mod blog;
pub mod catalog;
pub mod client;
pub mod orders;
pub mod payments;
pub mod sellers;

pub use client::{ApiClient, NOT_AUTHENTICATED};
