use serde::{Deserialize, Serialize};

/// Product category (`/admin/get-all-categories`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
}

/// Shop-by-name catalog entry: a product name with a display image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopByName {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Shop-by-category tile
///
/// Older records carry the picture under `image`, newer ones under `imageUrl`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShopByCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ShopByCategory {
    /// Image location, preferring `imageUrl` over the legacy `image` key.
    pub fn image_source(&self) -> Option<&str> {
        self.image_url.as_deref().or(self.image.as_deref())
    }
}

/// JSON `updates` part sent with multipart edits of named catalog entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameUpdate {
    pub name: String,
}
