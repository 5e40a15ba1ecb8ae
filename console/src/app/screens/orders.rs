//! Orders: read-only, searchable by customer or seller and filterable by day.

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::SellerOrder;

use super::list::{contains_ci, ListResource, ListScreen, Searchable};
use crate::core::error::Result;
use crate::core::service::AdminApi;

pub type OrdersScreen = ListScreen<Orders>;

pub struct Orders;

#[async_trait]
impl ListResource for Orders {
    type Entity = SellerOrder;

    fn noun(&self) -> &'static str {
        "Order"
    }

    async fn fetch_all(&self, api: &dyn AdminApi) -> Result<Vec<SellerOrder>> {
        api.get_all_orders().await
    }
}

impl Searchable for SellerOrder {
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.order.user.name, query) || contains_ci(&self.seller.name, query)
    }

    fn created_on(&self, date: NaiveDate) -> bool {
        self.order.created_on(date)
    }
}

/// Product id and quantity pairs for the order detail view.
///
/// A product without a matching quantity entry shows as 0.
pub fn order_lines(order: &SellerOrder) -> Vec<(String, i64)> {
    order
        .product_ids
        .iter()
        .enumerate()
        .map(|(i, product)| (product.clone(), order.quantity.get(i).copied().unwrap_or(0)))
        .collect()
}

/// Parse a `YYYY-MM-DD` date filter.
pub fn parse_date_filter(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}
