//! # Catalog Endpoints
//!
//! Product categories (plain query-string CRUD) plus the two image-backed
//! catalogs, shop-by-name and shop-by-category (multipart CRUD).
//!
//! Multipart layout:
//!
//! ```text
//! save:  file=<image>  name=<text>
//! edit:  [file=<image>]  updates=<{"name": "..."} as application/json>
//! ```

use reqwest::multipart::Form;
use reqwest::Method;
use shared::{NameUpdate, ProductCategory, ShopByCategory, ShopByName};

use super::client::{ApiClient, Payload};
use crate::core::error::Result;
use crate::services::upload::{json_part, ImageUpload};

// ========== Product categories ==========

pub async fn get_all_categories(client: &ApiClient) -> Result<Vec<ProductCategory>> {
    client.fetch_list("/admin/get-all-categories").await
}

#[tracing::instrument(skip(client))]
pub async fn save_category(client: &ApiClient, name: &str) -> Result<()> {
    client
        .send_command(
            Method::POST,
            "/admin/save-ProductCategory",
            &[("name", name.to_string())],
            Payload::Empty,
        )
        .await
}

#[tracing::instrument(skip(client))]
pub async fn update_category(client: &ApiClient, id: i64, name: &str) -> Result<()> {
    client
        .send_command(
            Method::PUT,
            "/admin/edit-productCategory",
            &[("id", id.to_string()), ("name", name.to_string())],
            Payload::Empty,
        )
        .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_category(client: &ApiClient, id: i64) -> Result<()> {
    client
        .send_command(
            Method::DELETE,
            "/admin/delete-productCategory",
            &[("id", id.to_string())],
            Payload::Empty,
        )
        .await
}

// ========== Shared multipart bodies ==========

fn create_form(image: ImageUpload, name: &str) -> Result<Form> {
    Ok(Form::new()
        .part("file", image.into_part()?)
        .text("name", name.to_string()))
}

fn update_form(name: &str, image: Option<ImageUpload>) -> Result<Form> {
    let mut form = Form::new();
    if let Some(image) = image {
        form = form.part("file", image.into_part()?);
    }
    let updates = NameUpdate {
        name: name.to_string(),
    };
    Ok(form.part("updates", json_part(&updates)?))
}

// ========== Shop by name ==========

pub async fn get_all_shop_by_name(client: &ApiClient) -> Result<Vec<ShopByName>> {
    client.fetch_list("/admin/get-all-shop-by-name").await
}

#[tracing::instrument(skip(client, image), fields(file = %image.file_name))]
pub async fn save_shop_by_name(client: &ApiClient, image: ImageUpload, name: &str) -> Result<()> {
    let form = create_form(image, name)?;
    client
        .send_command(Method::POST, "/admin/save-shopByName", &[], Payload::Multipart(form))
        .await
}

#[tracing::instrument(skip(client, image), fields(new_image = image.is_some()))]
pub async fn update_shop_by_name(
    client: &ApiClient,
    id: i64,
    name: &str,
    image: Option<ImageUpload>,
) -> Result<()> {
    let form = update_form(name, image)?;
    client
        .send_command(
            Method::PUT,
            "/admin/edit-shopByName",
            &[("id", id.to_string())],
            Payload::Multipart(form),
        )
        .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_shop_by_name(client: &ApiClient, id: i64) -> Result<()> {
    client
        .send_command(
            Method::DELETE,
            "/admin/delete-shopByName",
            &[("id", id.to_string())],
            Payload::Empty,
        )
        .await
}

// ========== Shop by category ==========

pub async fn get_all_shop_by_category(client: &ApiClient) -> Result<Vec<ShopByCategory>> {
    client.fetch_list("/admin/get-all-shop-by-categories").await
}

#[tracing::instrument(skip(client, image), fields(file = %image.file_name))]
pub async fn save_shop_by_category(client: &ApiClient, image: ImageUpload, name: &str) -> Result<()> {
    let form = create_form(image, name)?;
    client
        .send_command(Method::POST, "/admin/save-shopByCategory", &[], Payload::Multipart(form))
        .await
}

#[tracing::instrument(skip(client, image), fields(new_image = image.is_some()))]
pub async fn update_shop_by_category(
    client: &ApiClient,
    id: i64,
    name: &str,
    image: Option<ImageUpload>,
) -> Result<()> {
    let form = update_form(name, image)?;
    client
        .send_command(
            Method::PUT,
            "/admin/edit-shopByCategory",
            &[("id", id.to_string())],
            Payload::Multipart(form),
        )
        .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_shop_by_category(client: &ApiClient, id: i64) -> Result<()> {
    client
        .send_command(
            Method::DELETE,
            "/admin/delete-shopByCategory",
            &[("id", id.to_string())],
            Payload::Empty,
        )
        .await
}
