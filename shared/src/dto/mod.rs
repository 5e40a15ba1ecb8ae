//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the ShreeAura admin API.
//!
//! ## Module Organization
//!
//! - [`catalog`] - Product categories, shop-by-name and shop-by-category entries
//! - [`blog`] - Blog posts
//! - [`orders`] - Seller orders
//! - [`sellers`] - Seller directory
//! - [`payments`] - Seller payment balances
//! - [`de`] - Lenient deserializers for identifiers
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire (`amountPayableToSeller`)
//! - **Optional fields**: Missing keys deserialize to `None`
//! - **Identifiers**: Seller and order ids accept both JSON numbers and strings
//!
//! ## Example JSON
//!
//! ```text
//! GET /admin/get-all-categories
//!
//! [
//!   { "id": 1, "name": "Sarees" },
//!   { "id": 2, "name": "Kurtis" }
//! ]
//! ```

pub mod blog;
pub mod catalog;
pub mod de;
pub mod orders;
pub mod payments;
pub mod sellers;

pub use blog::*;
pub use catalog::*;
pub use orders::*;
pub use payments::*;
pub use sellers::*;
