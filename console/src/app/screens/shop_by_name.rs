//! Shop-by-name entries: a product name with a display image.

use async_trait::async_trait;
use shared::ShopByName;

use super::list::{contains_ci, CrudResource, ListResource, ListScreen, Searchable};
use crate::core::error::{AppError, Result};
use crate::core::service::AdminApi;
use crate::services::upload::ImageUpload;

pub type ShopByNameScreen = ListScreen<ShopByNameEntries>;

/// Form input for image-backed catalog entries.
///
/// A new entry needs both fields. An edit needs the name; leaving `image`
/// empty keeps the stored picture.
#[derive(Debug, Clone)]
pub struct CatalogEntryFields {
    pub name: String,
    pub image: Option<ImageUpload>,
}

impl CatalogEntryFields {
    pub fn new(name: impl Into<String>, image: Option<ImageUpload>) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    pub(crate) fn validate_create(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.image.is_none() {
            return Err(AppError::Validation("Name and image are required".to_string()));
        }
        Ok(())
    }

    pub(crate) fn validate_update(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        Ok(())
    }

    /// Trimmed name and the required image.
    pub(crate) fn into_new_entry(self) -> Result<(String, ImageUpload)> {
        let name = self.name.trim().to_string();
        match self.image {
            Some(image) => Ok((name, image)),
            None => Err(AppError::Validation("Name and image are required".to_string())),
        }
    }
}

pub struct ShopByNameEntries;

#[async_trait]
impl ListResource for ShopByNameEntries {
    type Entity = ShopByName;

    fn noun(&self) -> &'static str {
        "Shop by name entry"
    }

    async fn fetch_all(&self, api: &dyn AdminApi) -> Result<Vec<ShopByName>> {
        api.get_all_shop_by_name().await
    }
}

#[async_trait]
impl CrudResource for ShopByNameEntries {
    type Fields = CatalogEntryFields;

    fn entity_id(entity: &ShopByName) -> i64 {
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
        api.save_shop_by_name(image, &name).await
    }

    async fn update(&self, api: &dyn AdminApi, id: i64, fields: CatalogEntryFields) -> Result<()> {
        api.update_shop_by_name(id, fields.name.trim(), fields.image).await
    }

    async fn delete(&self, api: &dyn AdminApi, id: i64) -> Result<()> {
        api.delete_shop_by_name(id).await
    }
}

impl Searchable for ShopByName {
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
    }
}
