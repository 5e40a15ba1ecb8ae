use serde::{Deserialize, Serialize};

use super::de::{opt_string_or_number, string_or_number};

/// Seller registered on the platform.
///
/// Sellers are created by the storefront, never by the console. The address
/// block is only present on the directory endpoint; order and payment payloads
/// embed the short form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seller {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub pincode: Option<String>,
}

impl Seller {
    /// Single-line postal address, skipping absent parts.
    pub fn full_address(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.address, &self.city, &self.state]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.trim().is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
