//! # Seller Directory Endpoints

use shared::Seller;

use super::client::ApiClient;
use crate::core::error::Result;

pub async fn get_all_sellers(client: &ApiClient) -> Result<Vec<Seller>> {
    client.fetch_list("/admin/get-all-seller").await
}
