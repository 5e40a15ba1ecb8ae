//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! Every screen talks to the backend through [`AdminApi`]. Production code
//! injects [`crate::services::api::ApiClient`]; tests inject scripted mocks.

use async_trait::async_trait;
use shared::{Blog, BlogFields, PaymentAccount, ProductCategory, Seller, SellerOrder, ShopByCategory, ShopByName};

use super::error::Result;
use crate::services::upload::ImageUpload;

/// Trait for ShreeAura admin API operations
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Exchange admin credentials for a bearer token
    async fn admin_login(&self, email: &str, password: &str) -> Result<String>;

    // Product categories

    async fn get_all_categories(&self) -> Result<Vec<ProductCategory>>;

    async fn save_category(&self, name: &str) -> Result<()>;

    async fn update_category(&self, id: i64, name: &str) -> Result<()>;

    async fn delete_category(&self, id: i64) -> Result<()>;

    // Shop by name

    async fn get_all_shop_by_name(&self) -> Result<Vec<ShopByName>>;

    async fn save_shop_by_name(&self, image: ImageUpload, name: &str) -> Result<()>;

    /// Rename an entry, optionally replacing its image
    async fn update_shop_by_name(&self, id: i64, name: &str, image: Option<ImageUpload>) -> Result<()>;

    async fn delete_shop_by_name(&self, id: i64) -> Result<()>;

    // Shop by category

    async fn get_all_shop_by_category(&self) -> Result<Vec<ShopByCategory>>;

    async fn save_shop_by_category(&self, image: ImageUpload, name: &str) -> Result<()>;

    async fn update_shop_by_category(&self, id: i64, name: &str, image: Option<ImageUpload>) -> Result<()>;

    async fn delete_shop_by_category(&self, id: i64) -> Result<()>;

    // Blogs

    async fn get_all_blogs(&self) -> Result<Vec<Blog>>;

    async fn save_blog(&self, image: ImageUpload, fields: &BlogFields) -> Result<()>;

    async fn update_blog(&self, id: i64, fields: &BlogFields, image: Option<ImageUpload>) -> Result<()>;

    async fn delete_blog(&self, id: i64) -> Result<()>;

    // Orders and sellers

    async fn get_all_orders(&self) -> Result<Vec<SellerOrder>>;

    async fn get_all_sellers(&self) -> Result<Vec<Seller>>;

    // Seller payments

    /// Outstanding balances for one seller
    async fn get_payment_data(&self, seller_id: &str) -> Result<PaymentAccount>;

    /// Email a one-time code to the seller for a payout of `amount`
    async fn send_payment_otp(&self, seller_id: &str, amount: f64) -> Result<()>;

    /// Check the code the seller read out against their email
    async fn verify_payment_otp(&self, email: &str, otp: &str) -> Result<()>;

    /// Pay `amount` to the seller (requires a verified OTP server-side)
    async fn pay_to_seller(&self, seller_id: &str, amount: f64) -> Result<()>;

    /// Record `amount` collected from the seller
    async fn receive_from_seller(&self, seller_id: &str, amount: f64) -> Result<()>;
}
