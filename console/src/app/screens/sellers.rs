//! Seller directory: read-only, searchable by name, email or phone.

use async_trait::async_trait;
use shared::Seller;

use super::list::{contains_ci, ListResource, ListScreen, Searchable};
use crate::core::error::Result;
use crate::core::service::AdminApi;

pub type SellersScreen = ListScreen<Sellers>;

pub struct Sellers;

#[async_trait]
impl ListResource for Sellers {
    type Entity = Seller;

    fn noun(&self) -> &'static str {
        "Seller"
    }

    async fn fetch_all(&self, api: &dyn AdminApi) -> Result<Vec<Seller>> {
        api.get_all_sellers().await
    }
}

impl Searchable for Seller {
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.name, query) || contains_ci(&self.email, query) || contains_ci(&self.phone, query)
    }
}

impl ListScreen<Sellers> {
    pub fn find_seller(&self, id: &str) -> Option<Seller> {
        self.items().into_iter().find(|seller| seller.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::app::mock::{seller, MockAdminApi};

    #[tokio::test]
    async fn test_search_by_name_email_or_phone() {
        let api = Arc::new(MockAdminApi::new());
        let mut kashi = seller("9", "Kashi Weaves", "orders@kashi.in");
        kashi.phone = "9876543210".to_string();
        *api.sellers.lock() = vec![seller("7", "Meera Textiles", "meera@example.com"), kashi];

        let screen = ListScreen::new(Sellers, api.clone());
        screen.refresh().await.unwrap();

        screen.set_query("kashi.in");
        assert_eq!(screen.visible().len(), 1);
        screen.set_query("98765");
        assert_eq!(screen.visible()[0].id, "9");
        screen.set_query("textiles");
        assert_eq!(screen.visible()[0].id, "7");

        assert_eq!(screen.find_seller("9").map(|s| s.name), Some("Kashi Weaves".to_string()));
        assert!(screen.find_seller("404").is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_clears_loading_and_records_error() {
        let api = Arc::new(MockAdminApi::new());
        api.fail("get_all_sellers");
        let screen = ListScreen::new(Sellers, api.clone());

        assert!(screen.refresh().await.is_err());
        let state = screen.snapshot();
        assert!(!state.loading);
        assert!(state.error.is_some());
        assert_eq!(state.notices[0].message, "Failed to fetch seller list");
    }
}
