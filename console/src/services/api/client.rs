//! # API Client
//!
//! Main HTTP client for the ShreeAura admin API.
//!
//! Every admin call goes through [`ApiClient::send`], which:
//!
//! 1. Refuses to run without a stored credential
//! 2. Attaches `Authorization: Bearer <token>`
//! 3. Clears the credential on 401/403
//! 4. Normalizes the response body (empty → `null`, JSON when parseable,
//!    raw text otherwise) and turns non-2xx statuses into [`AppError::Api`]

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{Blog, BlogFields, PaymentAccount, ProductCategory, Seller, SellerOrder, ShopByCategory, ShopByName};

use crate::config::ConsoleConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::AdminApi;
use crate::core::session::SessionStore;
use crate::services::upload::ImageUpload;

/// Message returned when an admin call is attempted without a credential
pub const NOT_AUTHENTICATED: &str = "Admin not authenticated. Please login again.";

/// Request body variants accepted by the admin API
pub(crate) enum Payload {
    /// No body; still sent with a JSON content type like every non-form call
    Empty,
    Multipart(Form),
}

/// HTTP client for the admin API.
///
/// Holds a connection pool and the injected session. Cloning is cheap.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a client from the console configuration.
    pub fn new(config: &ConsoleConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        Self::with_base_url(&config.api_base_url, config.request_timeout, session)
    }

    /// Create a client for an explicit base URL.
    pub fn with_base_url(base_url: &str, timeout: Duration, session: Arc<dyn SessionStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue an authenticated request and return the normalized body.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        payload: Payload,
    ) -> Result<Value> {
        let token = self
            .session
            .token()
            .ok_or_else(|| AppError::Auth(NOT_AUTHENTICATED.to_string()))?;

        let start = Instant::now();
        let mut request = self
            .client
            .request(method.clone(), self.url(path))
            .bearer_auth(token);

        if !query.is_empty() {
            request = request.query(query);
        }

        request = match payload {
            Payload::Empty => request.header(CONTENT_TYPE, "application/json"),
            Payload::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await.map_err(|e| {
            tracing::error!(method = %method, path, error = %e, "Admin API network error");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            self.expire_session(status);
            return Err(AppError::SessionExpired);
        }

        let text = response.text().await.map_err(|e| {
            tracing::error!(method = %method, path, error = %e, "Failed to read response body");
            AppError::Network(e.to_string())
        })?;
        let body = parse_body(&text);
        let duration = start.elapsed();

        if !status.is_success() {
            let message = error_message(&body, status);
            tracing::warn!(
                method = %method,
                path,
                status = status.as_u16(),
                error = %message,
                duration_ms = duration.as_millis(),
                "Admin API request failed"
            );
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(
            method = %method,
            path,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Admin API request completed"
        );
        Ok(body)
    }

    /// Issue a request and deserialize the body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let body = self.send(method, path, query, Payload::Empty).await?;
        serde_json::from_value(body).map_err(|e| {
            tracing::error!(path, error = %e, "Unexpected response shape");
            AppError::Decode(format!("{}: {}", path, e))
        })
    }

    /// Fetch a list endpoint. An empty body is treated as an empty list.
    pub(crate) async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let body = self.send(Method::GET, path, &[], Payload::Empty).await?;
        match body {
            Value::Null => Ok(Vec::new()),
            Value::Array(_) => serde_json::from_value(body).map_err(|e| {
                tracing::error!(path, error = %e, "Unexpected list item shape");
                AppError::Decode(format!("{}: {}", path, e))
            }),
            other => {
                tracing::error!(path, body = %other, "Expected a JSON array");
                Err(AppError::Decode("Invalid response format".to_string()))
            }
        }
    }

    /// Issue a mutation whose response body is not interpreted.
    pub(crate) async fn send_command(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        payload: Payload,
    ) -> Result<()> {
        self.send(method, path, query, payload).await.map(|_| ())
    }

    fn expire_session(&self, status: StatusCode) {
        match self.session.clear() {
            Ok(true) => tracing::warn!(
                status = status.as_u16(),
                "Admin session rejected by server, stored credential cleared"
            ),
            Ok(false) => tracing::debug!(status = status.as_u16(), "Session already cleared"),
            Err(e) => tracing::error!(error = %e, "Failed to clear stored credential"),
        }
    }
}

/// Empty → `null`; JSON when parseable; raw text otherwise.
pub(crate) fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Human-readable message for a failed response.
pub(crate) fn error_message(body: &Value, status: StatusCode) -> String {
    let from_field = |field: &str| {
        body.get(field)
            .and_then(Value::as_str)
            .filter(|msg| !msg.trim().is_empty())
            .map(str::to_string)
    };

    if let Some(message) = from_field("message").or_else(|| from_field("error")) {
        return message;
    }

    match body {
        Value::String(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => format!("Error {}", status.as_u16()),
    }
}

// Implement AdminApi trait for ApiClient
#[async_trait]
impl AdminApi for ApiClient {
    async fn admin_login(&self, email: &str, password: &str) -> Result<String> {
        super::auth::admin_login(self, email, password).await
    }

    async fn get_all_categories(&self) -> Result<Vec<ProductCategory>> {
        super::catalog::get_all_categories(self).await
    }

    async fn save_category(&self, name: &str) -> Result<()> {
        super::catalog::save_category(self, name).await
    }

    async fn update_category(&self, id: i64, name: &str) -> Result<()> {
        super::catalog::update_category(self, id, name).await
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        super::catalog::delete_category(self, id).await
    }

    async fn get_all_shop_by_name(&self) -> Result<Vec<ShopByName>> {
        super::catalog::get_all_shop_by_name(self).await
    }

    async fn save_shop_by_name(&self, image: ImageUpload, name: &str) -> Result<()> {
        super::catalog::save_shop_by_name(self, image, name).await
    }

    async fn update_shop_by_name(&self, id: i64, name: &str, image: Option<ImageUpload>) -> Result<()> {
        super::catalog::update_shop_by_name(self, id, name, image).await
    }

    async fn delete_shop_by_name(&self, id: i64) -> Result<()> {
        super::catalog::delete_shop_by_name(self, id).await
    }

    async fn get_all_shop_by_category(&self) -> Result<Vec<ShopByCategory>> {
        super::catalog::get_all_shop_by_category(self).await
    }

    async fn save_shop_by_category(&self, image: ImageUpload, name: &str) -> Result<()> {
        super::catalog::save_shop_by_category(self, image, name).await
    }

    async fn update_shop_by_category(&self, id: i64, name: &str, image: Option<ImageUpload>) -> Result<()> {
        super::catalog::update_shop_by_category(self, id, name, image).await
    }

    async fn delete_shop_by_category(&self, id: i64) -> Result<()> {
        super::catalog::delete_shop_by_category(self, id).await
    }

    async fn get_all_blogs(&self) -> Result<Vec<Blog>> {
        super::blog::get_all_blogs(self).await
    }

    async fn save_blog(&self, image: ImageUpload, fields: &BlogFields) -> Result<()> {
        super::blog::save_blog(self, image, fields).await
    }

    async fn update_blog(&self, id: i64, fields: &BlogFields, image: Option<ImageUpload>) -> Result<()> {
        super::blog::update_blog(self, id, fields, image).await
    }

    async fn delete_blog(&self, id: i64) -> Result<()> {
        super::blog::delete_blog(self, id).await
    }

    async fn get_all_orders(&self) -> Result<Vec<SellerOrder>> {
        super::orders::get_all_orders(self).await
    }

    async fn get_all_sellers(&self) -> Result<Vec<Seller>> {
        super::sellers::get_all_sellers(self).await
    }

    async fn get_payment_data(&self, seller_id: &str) -> Result<PaymentAccount> {
        super::payments::get_payment_data(self, seller_id).await
    }

    async fn send_payment_otp(&self, seller_id: &str, amount: f64) -> Result<()> {
        super::payments::send_payment_otp(self, seller_id, amount).await
    }

    async fn verify_payment_otp(&self, email: &str, otp: &str) -> Result<()> {
        super::payments::verify_payment_otp(self, email, otp).await
    }

    async fn pay_to_seller(&self, seller_id: &str, amount: f64) -> Result<()> {
        super::payments::pay_to_seller(self, seller_id, amount).await
    }

    async fn receive_from_seller(&self, seller_id: &str, amount: f64) -> Result<()> {
        super::payments::receive_from_seller(self, seller_id, amount).await
    }
}
