//! # Order Endpoints

use shared::SellerOrder;

use super::client::ApiClient;
use crate::core::error::Result;

/// All seller orders, newest first as sent by the server.
pub async fn get_all_orders(client: &ApiClient) -> Result<Vec<SellerOrder>> {
    client.fetch_list("/admin/get-all-orders").await
}
