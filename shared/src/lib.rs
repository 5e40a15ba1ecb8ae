//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the admin console and the
//! ShreeAura REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::catalog`]**: Product categories, shop-by-name and shop-by-category entries
//!   - **[`dto::blog`]**: Blog posts and their editable metadata
//!   - **[`dto::orders`]**: Seller orders and order status labels
//!   - **[`dto::sellers`]**: Seller directory entries
//!   - **[`dto::payments`]**: Per-seller payable/receivable balances
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_amount`]**: Two-decimal amount rendering
//!   - **[`utils::format_rupees`]**: Amount rendering with the rupee sign
//!
//! ## Wire Format
//!
//! The ShreeAura API speaks camelCase JSON, so most DTOs carry
//! `#[serde(rename_all = "camelCase")]`. Identifiers that the server sometimes
//! sends as numbers and sometimes as strings go through [`dto::de`].
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::payments::PaymentAccount;
//! use shared::utils::format_rupees;
//!
//! let json = r#"{
//!     "id": 7,
//!     "seller": { "id": 12, "name": "Asha Traders", "email": "asha@example.com", "phone": "9999999999" },
//!     "amountPayableToSeller": 500.0,
//!     "amountReceivableFromSeller": 12.5
//! }"#;
//!
//! let account: PaymentAccount = serde_json::from_str(json).unwrap();
//! assert_eq!(account.seller.id, "12");
//! assert_eq!(format_rupees(account.amount_payable_to_seller), "₹500.00");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
