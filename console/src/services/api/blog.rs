//! # Blog Endpoints
//!
//! Blog CRUD. Bodies are multipart: an optional image under `file` and the
//! metadata as a JSON part (`blog` on create, `updates` on edit).

use reqwest::multipart::Form;
use reqwest::Method;
use shared::{Blog, BlogFields};

use super::client::{ApiClient, Payload};
use crate::core::error::Result;
use crate::services::upload::{json_part, ImageUpload};

pub async fn get_all_blogs(client: &ApiClient) -> Result<Vec<Blog>> {
    client.fetch_list("/admin/get-all-blogs").await
}

#[tracing::instrument(skip(client, image, fields), fields(title = %fields.title))]
pub async fn save_blog(client: &ApiClient, image: ImageUpload, fields: &BlogFields) -> Result<()> {
    let form = Form::new()
        .part("file", image.into_part()?)
        .part("blog", json_part(fields)?);

    client
        .send_command(Method::POST, "/admin/save-blog", &[], Payload::Multipart(form))
        .await
}

#[tracing::instrument(skip(client, image, fields), fields(title = %fields.title, new_image = image.is_some()))]
pub async fn update_blog(
    client: &ApiClient,
    id: i64,
    fields: &BlogFields,
    image: Option<ImageUpload>,
) -> Result<()> {
    let mut form = Form::new();
    if let Some(image) = image {
        form = form.part("file", image.into_part()?);
    }
    form = form.part("updates", json_part(fields)?);

    client
        .send_command(
            Method::PUT,
            "/admin/edit-blog",
            &[("id", id.to_string())],
            Payload::Multipart(form),
        )
        .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_blog(client: &ApiClient, id: i64) -> Result<()> {
    client
        .send_command(
            Method::DELETE,
            "/admin/delete-blog",
            &[("id", id.to_string())],
            Payload::Empty,
        )
        .await
}
