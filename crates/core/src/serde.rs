//! Serde helper functions for product payloads.
//!
//! Payloads written by other producers encode empty optional fields as `null`
//! (most often `"tags": null`). These helpers fold `null` into the field's
//! default value so such payloads still decode.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, treating `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing field also yields the default.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_null_default")]
        string_field: String,
        #[serde(default, deserialize_with = "deserialize_null_default")]
        list_field: Vec<String>,
        #[serde(default, deserialize_with = "deserialize_null_default")]
        number_field: f32,
    }

    #[test]
    fn test_null_string_becomes_empty() {
        let json = r#"{"string_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, "");
    }

    #[test]
    fn test_null_list_becomes_empty() {
        let json = r#"{"list_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert!(result.list_field.is_empty());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(
            result,
            TestStruct {
                string_field: String::new(),
                list_field: Vec::new(),
                number_field: 0.0,
            }
        );
    }

    #[test]
    fn test_present_values_are_kept() {
        let json = r#"{"string_field": "hello", "list_field": ["a", "b"], "number_field": 2.5}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, "hello");
        assert_eq!(result.list_field, vec!["a", "b"]);
        assert_eq!(result.number_field, 2.5);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let json = r#"{"list_field": "not-a-list"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
