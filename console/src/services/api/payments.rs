//! # Seller Payment Endpoints
//!
//! Balance lookup, the OTP pair that gates payouts, and the two money
//! movements. Amounts travel as plain decimal query parameters.

use reqwest::Method;
use shared::PaymentAccount;

use super::client::{ApiClient, Payload};
use crate::core::error::Result;

pub async fn get_payment_data(client: &ApiClient, seller_id: &str) -> Result<PaymentAccount> {
    client
        .send_json(
            Method::GET,
            "/admin/get-payment-data",
            &[("sellerId", seller_id.to_string())],
        )
        .await
}

#[tracing::instrument(skip(client))]
pub async fn send_payment_otp(client: &ApiClient, seller_id: &str, amount: f64) -> Result<()> {
    client
        .send_command(
            Method::POST,
            "/admin/send-email-otp-for-payment",
            &[("id", seller_id.to_string()), ("amount", amount.to_string())],
            Payload::Empty,
        )
        .await
}

#[tracing::instrument(skip(client, otp))]
pub async fn verify_payment_otp(client: &ApiClient, email: &str, otp: &str) -> Result<()> {
    client
        .send_command(
            Method::POST,
            "/admin/verify-email-otp-for-payment",
            &[("email", email.to_string()), ("otp", otp.to_string())],
            Payload::Empty,
        )
        .await
}

#[tracing::instrument(skip(client))]
pub async fn pay_to_seller(client: &ApiClient, seller_id: &str, amount: f64) -> Result<()> {
    client
        .send_command(
            Method::POST,
            "/admin/pay-to-seller",
            &[("id", seller_id.to_string()), ("amount", amount.to_string())],
            Payload::Empty,
        )
        .await
}

#[tracing::instrument(skip(client))]
pub async fn receive_from_seller(client: &ApiClient, seller_id: &str, amount: f64) -> Result<()> {
    client
        .send_command(
            Method::POST,
            "/admin/get-from-seller",
            &[("id", seller_id.to_string()), ("amount", amount.to_string())],
            Payload::Empty,
        )
        .await
}
