//! Blog posts. Any blog mutation locks the whole screen.

use async_trait::async_trait;
use shared::{word_count, Blog, BlogFields};

use super::list::{contains_ci, CrudResource, ListResource, ListScreen, LockPolicy, Searchable};
use crate::core::error::{AppError, Result};
use crate::core::service::AdminApi;
use crate::services::upload::ImageUpload;

/// Longest accepted description, in words
pub const MAX_DESCRIPTION_WORDS: usize = 5000;

pub type BlogScreen = ListScreen<Blogs>;

/// Blog form input
#[derive(Debug, Clone)]
pub struct BlogDraft {
    pub title: String,
    pub description: String,
    /// Required for a new post; optional on edit
    pub image: Option<ImageUpload>,
}

impl BlogDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>, image: Option<ImageUpload>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(AppError::Validation("Title and description are required".to_string()));
        }
        let words = word_count(&self.description);
        if words > MAX_DESCRIPTION_WORDS {
            return Err(AppError::Validation(format!(
                "Description is {} words; the limit is {}",
                words, MAX_DESCRIPTION_WORDS
            )));
        }
        Ok(())
    }

    fn fields(&self) -> BlogFields {
        BlogFields {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

pub struct Blogs;

#[async_trait]
impl ListResource for Blogs {
    type Entity = Blog;

    fn noun(&self) -> &'static str {
        "Blog"
    }

    async fn fetch_all(&self, api: &dyn AdminApi) -> Result<Vec<Blog>> {
        api.get_all_blogs().await
    }
}

#[async_trait]
impl CrudResource for Blogs {
    type Fields = BlogDraft;

    fn entity_id(entity: &Blog) -> i64 {
        entity.id
    }

    fn lock_policy(&self) -> LockPolicy {
        LockPolicy::Global
    }

    fn validate_create(&self, draft: &BlogDraft) -> Result<()> {
        draft.validate()?;
        if draft.image.is_none() {
            return Err(AppError::Validation("Image is required for a new blog".to_string()));
        }
        Ok(())
    }

    fn validate_update(&self, draft: &BlogDraft) -> Result<()> {
        draft.validate()
    }

    async fn create(&self, api: &dyn AdminApi, draft: BlogDraft) -> Result<()> {
        let fields = draft.fields();
        match draft.image {
            Some(image) => api.save_blog(image, &fields).await,
            None => Err(AppError::Validation("Image is required for a new blog".to_string())),
        }
    }

    async fn update(&self, api: &dyn AdminApi, id: i64, draft: BlogDraft) -> Result<()> {
        let fields = draft.fields();
        api.update_blog(id, &fields, draft.image).await
    }

    async fn delete(&self, api: &dyn AdminApi, id: i64) -> Result<()> {
        api.delete_blog(id).await
    }
}

impl Searchable for Blog {
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.title, query) || contains_ci(&self.description, query)
    }
}
