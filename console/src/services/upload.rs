//! # Image Uploads
//!
//! Catalog tiles and blog posts carry an image sent as the `file` part of a
//! multipart body. [`ImageUpload`] is the in-memory form of that file.

use std::path::Path;

use reqwest::multipart::Part;
use serde::Serialize;

use crate::core::error::{AppError, Result};

/// Image file ready to be attached to a multipart request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Wrap raw bytes, guessing the content type from the file extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read an image from disk.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        if bytes.is_empty() {
            return Err(AppError::Validation(format!("Image file {} is empty", path.display())));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        tracing::debug!(file = %file_name, size = bytes.len(), "Image loaded for upload");
        Ok(Self::new(file_name, bytes))
    }

    pub(crate) fn into_part(self) -> Result<Part> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.content_type)
            .map_err(|e| AppError::Validation(format!("Unsupported image type: {}", e)))
    }
}

/// JSON-encoded multipart part (`Content-Type: application/json`).
pub(crate) fn json_part<T: Serialize>(value: &T) -> Result<Part> {
    let body = serde_json::to_string(value)?;
    Part::text(body)
        .mime_str("application/json")
        .map_err(AppError::from)
}

fn guess_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_guess() {
        assert_eq!(ImageUpload::new("banner.PNG", vec![1]).content_type, "image/png");
        assert_eq!(ImageUpload::new("tile.jpeg", vec![1]).content_type, "image/jpeg");
        assert_eq!(ImageUpload::new("noext", vec![1]).content_type, "application/octet-stream");
    }

    #[tokio::test]
    async fn test_from_path_rejects_empty_file() {
        let path = std::env::temp_dir().join(format!("empty-{}.png", uuid::Uuid::new_v4()));
        std::fs::write(&path, b"").unwrap();

        let result = ImageUpload::from_path(&path).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_from_path_reads_bytes() {
        let path = std::env::temp_dir().join(format!("tile-{}.webp", uuid::Uuid::new_v4()));
        std::fs::write(&path, b"RIFF").unwrap();

        let upload = ImageUpload::from_path(&path).await.unwrap();
        assert_eq!(upload.bytes, b"RIFF");
        assert_eq!(upload.content_type, "image/webp");
        assert!(upload.file_name.ends_with(".webp"));

        let _ = std::fs::remove_file(path);
    }
}
