//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! stored records. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use catalog_core::catalog::CatalogItem;
use catalog_core::storage::{keys, RepositoryError, StoredRecord};

/// Build the primary key (PK, SK) for a product.
pub fn product_key(id: &str) -> HashMap<String, AttributeValue> {
    let mut key = HashMap::new();
    key.insert(
        keys::PK.to_string(),
        AttributeValue::S(keys::product_pk().to_string()),
    );
    key.insert(keys::SK.to_string(), AttributeValue::S(keys::product_sk(id)));
    key
}

/// Build the primary key (PK, SK) of a stored record.
pub fn record_key(record: &StoredRecord) -> HashMap<String, AttributeValue> {
    let mut key = HashMap::new();
    key.insert(
        keys::PK.to_string(),
        AttributeValue::S(record.partition_key.clone()),
    );
    key.insert(
        keys::SK.to_string(),
        AttributeValue::S(record.sort_key.clone()),
    );
    key
}

/// Convert a DynamoDB item to a stored record.
pub fn item_to_record(
    item: &HashMap<String, AttributeValue>,
) -> Result<StoredRecord, RepositoryError> {
    Ok(StoredRecord {
        partition_key: get_string(item, keys::PK)?,
        sort_key: get_string(item, keys::SK)?,
        payload: get_string(item, keys::PAYLOAD)?,
    })
}

/// Convert a DynamoDB item to a catalog item.
///
/// A missing attribute is reported as a serialization failure so listings
/// treat it like any other corrupt record.
pub fn item_to_catalog_item(
    item: &HashMap<String, AttributeValue>,
) -> Result<CatalogItem, RepositoryError> {
    item_to_record(item)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?
        .decode()
}

// ============================================================================
// Attribute helpers
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> CatalogItem {
        CatalogItem::new("Shoe")
            .with_id("550e8400-e29b-41d4-a716-446655440001")
            .with_price(19.99)
            .with_tags(["run"])
    }

    #[test]
    fn test_product_key() {
        let key = product_key("550e8400-e29b-41d4-a716-446655440001");

        assert_eq!(key.len(), 2);
        assert_eq!(key.get("PK").unwrap().as_s().unwrap(), "PRODUCT");
        assert_eq!(
            key.get("SK").unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440001"
        );
    }

    #[test]
    fn test_record_key_matches_product_key() {
        let item = sample_item();
        let record = StoredRecord::for_item(&item).unwrap();

        assert_eq!(record_key(&record), product_key(&item.id));
    }

    #[test]
    fn test_item_to_catalog_item() {
        let original = sample_item();
        let mut item = product_key(&original.id);
        item.insert(
            "Payload".to_string(),
            AttributeValue::S(catalog_core::catalog::encode_to_string(&original)),
        );

        let decoded = item_to_catalog_item(&item).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_item_without_payload_is_serialization_error() {
        let item = product_key("abc");

        let result = item_to_catalog_item(&item);

        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[test]
    fn test_item_with_non_string_payload_is_serialization_error() {
        let mut item = product_key("abc");
        item.insert("Payload".to_string(), AttributeValue::N("42".to_string()));

        let result = item_to_catalog_item(&item);

        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[test]
    fn test_item_with_corrupt_payload_is_serialization_error() {
        let mut item = product_key("abc");
        item.insert(
            "Payload".to_string(),
            AttributeValue::S("{\"name\":".to_string()),
        );

        let result = item_to_catalog_item(&item);

        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    fn item_with_payload(sort_key: &str, payload: &str) -> HashMap<String, AttributeValue> {
        let mut item = product_key(sort_key);
        item.insert("Payload".to_string(), AttributeValue::S(payload.to_string()));
        item
    }

    #[test]
    fn test_item_to_record() {
        let record = item_to_record(&item_with_payload("abc", "{}")).unwrap();

        assert_eq!(record.partition_key, "PRODUCT");
        assert_eq!(record.sort_key, "abc");
        assert_eq!(record.payload, "{}");
    }

    #[test]
    fn test_item_whose_payload_has_no_id_is_serialization_error() {
        let item = item_with_payload("abc", r#"{"name": "NoId"}"#);

        let result = item_to_catalog_item(&item);

        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[test]
    fn test_item_whose_payload_id_differs_from_sk_is_serialization_error() {
        let item = item_with_payload("xyz", r#"{"id": "other", "name": "Mismatch"}"#);

        let result = item_to_catalog_item(&item);

        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[test]
    fn test_get_string_missing_field() {
        let item = HashMap::new();
        assert!(get_string(&item, "missing").is_err());
    }
}
