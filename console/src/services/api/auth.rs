//! # Authentication Endpoint
//!
//! Admin login. This is the only call made without a bearer token.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

/// Exchange admin email and password for a bearer token.
///
/// The endpoint answers with the raw token as a text body. The token is
/// returned, not stored: persisting it is the caller's decision.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn admin_login(client: &ApiClient, email: &str, password: &str) -> Result<String> {
    tracing::info!("Attempting admin login");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(client.url("/auth/admin-login"))
        .query(&[("email", email), ("password", password)])
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            AppError::Network(e.to_string())
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        tracing::error!(error = %e, "Login response read error");
        AppError::Network(e.to_string())
    })?;
    let duration = start.elapsed();

    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Login failed"
        );
        let detail = body.trim();
        let detail = if detail.is_empty() { "Invalid credentials" } else { detail };
        return Err(AppError::Auth(format!("Login failed: {}", detail)));
    }

    let token = body.trim();
    if token.is_empty() {
        tracing::warn!("Login succeeded but no token was returned");
        return Err(AppError::Auth("Login failed: empty token".to_string()));
    }

    tracing::info!(duration_ms = duration.as_millis(), "Login successful");
    Ok(token.to_string())
}
