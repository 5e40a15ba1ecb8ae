//! Product categories: name-only entities edited through query strings.

use async_trait::async_trait;
use shared::ProductCategory;

use super::list::{contains_ci, CrudResource, ListResource, ListScreen, Searchable};
use crate::core::error::{AppError, Result};
use crate::core::service::AdminApi;

pub type CategoriesScreen = ListScreen<Categories>;

pub struct Categories;

fn require_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Category name is required".to_string()));
    }
    Ok(())
}

#[async_trait]
impl ListResource for Categories {
    type Entity = ProductCategory;

    fn noun(&self) -> &'static str {
        "Category"
    }

    async fn fetch_all(&self, api: &dyn AdminApi) -> Result<Vec<ProductCategory>> {
        api.get_all_categories().await
    }
}

#[async_trait]
impl CrudResource for Categories {
    /// Category name
    type Fields = String;

    fn entity_id(entity: &ProductCategory) -> i64 {
        entity.id
    }

    fn validate_create(&self, name: &String) -> Result<()> {
        require_name(name)
    }

    fn validate_update(&self, name: &String) -> Result<()> {
        require_name(name)
    }

    async fn create(&self, api: &dyn AdminApi, name: String) -> Result<()> {
        api.save_category(name.trim()).await
    }

    async fn update(&self, api: &dyn AdminApi, id: i64, name: String) -> Result<()> {
        api.update_category(id, name.trim()).await
    }

    async fn delete(&self, api: &dyn AdminApi, id: i64) -> Result<()> {
        api.delete_category(id).await
    }
}

impl Searchable for ProductCategory {
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
    }
}
