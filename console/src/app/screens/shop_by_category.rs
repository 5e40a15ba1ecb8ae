//! Shop-by-category tiles. Same form as shop-by-name, separate endpoints.

use async_trait::async_trait;
use shared::ShopByCategory;

use super::list::{contains_ci, CrudResource, ListResource, ListScreen, Searchable};
use super::shop_by_name::CatalogEntryFields;
use crate::core::error::Result;
use crate::core::service::AdminApi;

pub type ShopByCategoryScreen = ListScreen<ShopByCategoryEntries>;

pub struct ShopByCategoryEntries;

#[async_trait]
impl ListResource for ShopByCategoryEntries {
    type Entity = ShopByCategory;

    fn noun(&self) -> &'static str {
        "Shop by category entry"
    }

    async fn fetch_all(&self, api: &dyn AdminApi) -> Result<Vec<ShopByCategory>> {
        api.get_all_shop_by_category().await
    }
}

#[async_trait]
impl CrudResource for ShopByCategoryEntries {
    type Fields = CatalogEntryFields;

    fn entity_id(entity: &ShopByCategory) -> i64 {
        entity.id
    }

    fn validate_create(&self, fields: &CatalogEntryFields) -> Result<()> {
        fields.validate_create()
    }

    fn validate_update(&self, fields: &CatalogEntryFields) -> Result<()> {
        fields.validate_update()
    }

    async fn create(&self, api: &dyn AdminApi, fields: CatalogEntryFields) -> Result<()> {
        let (name, image) = fields.into_new_entry()?;
        api.save_shop_by_category(image, &name).await
    }

    async fn update(&self, api: &dyn AdminApi, id: i64, fields: CatalogEntryFields) -> Result<()> {
        api.update_shop_by_category(id, fields.name.trim(), fields.image).await
    }

    async fn delete(&self, api: &dyn AdminApi, id: i64) -> Result<()> {
        api.delete_shop_by_category(id).await
    }
}

impl Searchable for ShopByCategory {
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
    }
}
