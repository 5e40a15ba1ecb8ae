//! Lenient deserializers for identifiers the API emits as either numbers or strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::String(s) => s,
            StringOrNumber::Int(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

/// Deserialize a JSON string or number into a `String`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
}

/// Optional variant of [`string_or_number`]; `null` and missing keys become `None`.
///
/// Use together with `#[serde(default)]`.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer)
        .map(|value| value.map(StringOrNumber::into_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "opt_string_or_number")]
        pincode: Option<String>,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let a: Probe = serde_json::from_str(r#"{"id": 42, "pincode": 560001}"#).unwrap();
        assert_eq!(a.id, "42");
        assert_eq!(a.pincode.as_deref(), Some("560001"));

        let b: Probe = serde_json::from_str(r#"{"id": "S-9"}"#).unwrap();
        assert_eq!(b.id, "S-9");
        assert!(b.pincode.is_none());

        let c: Probe = serde_json::from_str(r#"{"id": "1", "pincode": null}"#).unwrap();
        assert!(c.pincode.is_none());
    }
}
