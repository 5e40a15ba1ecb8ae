use serde::{Deserialize, Serialize};

/// Blog post as returned by `/admin/get-all-blogs`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Editable blog metadata, sent as the JSON part of the multipart body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogFields {
    pub title: String,
    pub description: String,
}

impl From<&Blog> for BlogFields {
    fn from(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            description: blog.description.clone(),
        }
    }
}
