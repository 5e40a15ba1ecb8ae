//! Scripted in-memory [`AdminApi`] for unit tests.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    Blog, BlogFields, Order, OrderUser, PaymentAccount, ProductCategory, Seller, SellerOrder, ShopByCategory,
    ShopByName,
};
use tokio::sync::Notify;

use crate::core::error::{AppError, Result};
use crate::core::service::AdminApi;
use crate::services::upload::ImageUpload;

/// In-memory backend. Mutations change the stored lists so re-fetches see them.
#[derive(Default)]
pub(crate) struct MockAdminApi {
    pub calls: Mutex<Vec<String>>,
    pub categories: Mutex<Vec<ProductCategory>>,
    pub shop_by_name: Mutex<Vec<ShopByName>>,
    pub shop_by_category: Mutex<Vec<ShopByCategory>>,
    pub blogs: Mutex<Vec<Blog>>,
    pub orders: Mutex<Vec<SellerOrder>>,
    pub sellers: Mutex<Vec<Seller>>,
    pub account: Mutex<Option<PaymentAccount>>,
    pub valid_otp: Mutex<String>,
    /// Operation names that answer with a 500
    pub failing: Mutex<HashSet<&'static str>>,
    /// Operation names that answer with a 401
    pub unauthorized: Mutex<HashSet<&'static str>>,
    /// When set, every call parks until notified
    pub gate: Mutex<Option<Arc<Notify>>>,
    next_id: Mutex<i64>,
}

impl MockAdminApi {
    pub fn new() -> Self {
        let api = Self::default();
        *api.next_id.lock() = 100;
        *api.valid_otp.lock() = "1234".to_string();
        api
    }

    pub fn with_account(payable: f64, receivable: f64) -> Self {
        let api = Self::new();
        *api.account.lock() = Some(PaymentAccount {
            id: 1,
            seller: seller("7", "Meera Textiles", "meera@example.com"),
            amount_payable_to_seller: payable,
            amount_receivable_from_seller: receivable,
        });
        api
    }

    pub fn with_categories(names: &[&str]) -> Self {
        let api = Self::new();
        *api.categories.lock() = names
            .iter()
            .enumerate()
            .map(|(i, name)| ProductCategory {
                id: i as i64 + 1,
                name: name.to_string(),
            })
            .collect();
        api
    }

    pub fn fail(&self, op: &'static str) {
        self.failing.lock().insert(op);
    }

    pub fn recover(&self, op: &'static str) {
        self.failing.lock().remove(op);
    }

    pub fn reject_session(&self, op: &'static str) {
        self.unauthorized.lock().insert(op);
    }

    pub fn hold(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock() = Some(notify.clone());
        notify
    }

    /// Drop the gate and wake the parked call. Later calls run straight through.
    pub fn release(&self) {
        if let Some(gate) = self.gate.lock().take() {
            gate.notify_one();
        }
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls.lock().iter().filter(|call| call.as_str() == op).count()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn next_id(&self) -> i64 {
        let mut id = self.next_id.lock();
        *id += 1;
        *id
    }

    async fn record(&self, op: &'static str) -> Result<()> {
        self.calls.lock().push(op.to_string());

        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.unauthorized.lock().contains(op) {
            return Err(AppError::SessionExpired);
        }
        if self.failing.lock().contains(op) {
            return Err(AppError::Api {
                status: 500,
                message: format!("{} failed", op),
            });
        }
        Ok(())
    }
}

pub(crate) fn seller(id: &str, name: &str, email: &str) -> Seller {
    Seller {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: String::new(),
        address: None,
        city: None,
        state: None,
        pincode: None,
    }
}

pub(crate) fn seller_order(id: i64, customer: &str, seller_name: &str, created_at: &str) -> SellerOrder {
    SellerOrder {
        id,
        seller: seller(&id.to_string(), seller_name, "seller@example.com"),
        order: Order {
            order_id: format!("ORD-{}", id),
            address: "12 MG Road, Pune".to_string(),
            status: 1,
            price: 799.0,
            payment_method: Some("UPI".to_string()),
            user: OrderUser {
                name: customer.to_string(),
                email: "customer@example.com".to_string(),
            },
            created_at: Some(created_at.to_string()),
        },
        product_ids: vec!["P-1".to_string(), "P-2".to_string()],
        quantity: vec![2, 1],
    }
}

#[async_trait]
impl AdminApi for MockAdminApi {
    async fn admin_login(&self, email: &str, password: &str) -> Result<String> {
        self.record("admin_login").await?;
        if email == "admin@shreeaura.in" && password == "secret" {
            Ok("mock-token".to_string())
        } else {
            Err(AppError::Auth("Login failed: Invalid credentials".to_string()))
        }
    }

    async fn get_all_categories(&self) -> Result<Vec<ProductCategory>> {
        self.record("get_all_categories").await?;
        Ok(self.categories.lock().clone())
    }

    async fn save_category(&self, name: &str) -> Result<()> {
        self.record("save_category").await?;
        let id = self.next_id();
        self.categories.lock().push(ProductCategory {
            id,
            name: name.to_string(),
        });
        Ok(())
    }

    async fn update_category(&self, id: i64, name: &str) -> Result<()> {
        self.record("update_category").await?;
        for category in self.categories.lock().iter_mut().filter(|c| c.id == id) {
            category.name = name.to_string();
        }
        Ok(())
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        self.record("delete_category").await?;
        self.categories.lock().retain(|c| c.id != id);
        Ok(())
    }

    async fn get_all_shop_by_name(&self) -> Result<Vec<ShopByName>> {
        self.record("get_all_shop_by_name").await?;
        Ok(self.shop_by_name.lock().clone())
    }

    async fn save_shop_by_name(&self, image: ImageUpload, name: &str) -> Result<()> {
        self.record("save_shop_by_name").await?;
        let id = self.next_id();
        self.shop_by_name.lock().push(ShopByName {
            id,
            name: name.to_string(),
            image: Some(format!("https://cdn.example.com/{}", image.file_name)),
        });
        Ok(())
    }

    async fn update_shop_by_name(&self, id: i64, name: &str, image: Option<ImageUpload>) -> Result<()> {
        self.record("update_shop_by_name").await?;
        for entry in self.shop_by_name.lock().iter_mut().filter(|e| e.id == id) {
            entry.name = name.to_string();
            if let Some(image) = &image {
                entry.image = Some(format!("https://cdn.example.com/{}", image.file_name));
            }
        }
        Ok(())
    }

    async fn delete_shop_by_name(&self, id: i64) -> Result<()> {
        self.record("delete_shop_by_name").await?;
        self.shop_by_name.lock().retain(|e| e.id != id);
        Ok(())
    }

    async fn get_all_shop_by_category(&self) -> Result<Vec<ShopByCategory>> {
        self.record("get_all_shop_by_category").await?;
        Ok(self.shop_by_category.lock().clone())
    }

    async fn save_shop_by_category(&self, image: ImageUpload, name: &str) -> Result<()> {
        self.record("save_shop_by_category").await?;
        let id = self.next_id();
        self.shop_by_category.lock().push(ShopByCategory {
            id,
            name: name.to_string(),
            image_url: Some(format!("https://cdn.example.com/{}", image.file_name)),
            image: None,
        });
        Ok(())
    }

    async fn update_shop_by_category(&self, id: i64, name: &str, _image: Option<ImageUpload>) -> Result<()> {
        self.record("update_shop_by_category").await?;
        for entry in self.shop_by_category.lock().iter_mut().filter(|e| e.id == id) {
            entry.name = name.to_string();
        }
        Ok(())
    }

    async fn delete_shop_by_category(&self, id: i64) -> Result<()> {
        self.record("delete_shop_by_category").await?;
        self.shop_by_category.lock().retain(|e| e.id != id);
        Ok(())
    }

    async fn get_all_blogs(&self) -> Result<Vec<Blog>> {
        self.record("get_all_blogs").await?;
        Ok(self.blogs.lock().clone())
    }

    async fn save_blog(&self, image: ImageUpload, fields: &BlogFields) -> Result<()> {
        self.record("save_blog").await?;
        let id = self.next_id();
        self.blogs.lock().push(Blog {
            id,
            title: fields.title.clone(),
            description: fields.description.clone(),
            image_url: Some(format!("https://cdn.example.com/{}", image.file_name)),
        });
        Ok(())
    }

    async fn update_blog(&self, id: i64, fields: &BlogFields, _image: Option<ImageUpload>) -> Result<()> {
        self.record("update_blog").await?;
        for blog in self.blogs.lock().iter_mut().filter(|b| b.id == id) {
            blog.title = fields.title.clone();
            blog.description = fields.description.clone();
        }
        Ok(())
    }

    async fn delete_blog(&self, id: i64) -> Result<()> {
        self.record("delete_blog").await?;
        self.blogs.lock().retain(|b| b.id != id);
        Ok(())
    }

    async fn get_all_orders(&self) -> Result<Vec<SellerOrder>> {
        self.record("get_all_orders").await?;
        Ok(self.orders.lock().clone())
    }

    async fn get_all_sellers(&self) -> Result<Vec<Seller>> {
        self.record("get_all_sellers").await?;
        Ok(self.sellers.lock().clone())
    }

    async fn get_payment_data(&self, _seller_id: &str) -> Result<PaymentAccount> {
        self.record("get_payment_data").await?;
        self.account
            .lock()
            .clone()
            .ok_or_else(|| AppError::Api {
                status: 404,
                message: "Seller not found".to_string(),
            })
    }

    async fn send_payment_otp(&self, _seller_id: &str, _amount: f64) -> Result<()> {
        self.record("send_payment_otp").await
    }

    async fn verify_payment_otp(&self, _email: &str, otp: &str) -> Result<()> {
        self.record("verify_payment_otp").await?;
        if otp == self.valid_otp.lock().as_str() {
            Ok(())
        } else {
            Err(AppError::Api {
                status: 400,
                message: "Invalid OTP".to_string(),
            })
        }
    }

    async fn pay_to_seller(&self, _seller_id: &str, amount: f64) -> Result<()> {
        self.record("pay_to_seller").await?;
        if let Some(account) = self.account.lock().as_mut() {
            account.amount_payable_to_seller -= amount;
        }
        Ok(())
    }

    async fn receive_from_seller(&self, _seller_id: &str, amount: f64) -> Result<()> {
        self.record("receive_from_seller").await?;
        if let Some(account) = self.account.lock().as_mut() {
            account.amount_receivable_from_seller -= amount;
        }
        Ok(())
    }
}
