//! MongoDB document conversion functions.
//!
//! Pure functions for converting between BSON documents and stored records.
//! These are testable in isolation without a MongoDB server.

use catalog_core::catalog::CatalogItem;
use catalog_core::storage::{keys, RepositoryError, StoredRecord};
use mongodb::bson::Document;

/// Convert a stored record to a document.
///
/// Layout: `{ SK, PK, Payload }`.
pub fn record_to_document(record: &StoredRecord) -> Document {
    let mut document = Document::new();
    document.insert(keys::SK, record.sort_key.as_str());
    document.insert(keys::PK, record.partition_key.as_str());
    document.insert(keys::PAYLOAD, record.payload.as_str());
    document
}

/// Filter matching the document of one record, used for upserts.
pub fn record_filter(record: &StoredRecord) -> Document {
    let mut filter = Document::new();
    filter.insert(keys::PK, record.partition_key.as_str());
    filter.insert(keys::SK, record.sort_key.as_str());
    filter
}

/// Filter matching every document in the product partition.
pub fn partition_filter() -> Document {
    let mut filter = Document::new();
    filter.insert(keys::PK, keys::product_pk());
    filter
}

/// Filter matching the document of one product by id.
pub fn product_filter(id: &str) -> Document {
    let mut filter = Document::new();
    filter.insert(keys::PK, keys::product_pk());
    filter.insert(keys::SK, keys::product_sk(id));
    filter
}

/// Convert a document to a stored record.
///
/// A missing or non-string field is reported as a serialization failure so
/// listings treat it like any other corrupt record.
pub fn document_to_record(document: &Document) -> Result<StoredRecord, RepositoryError> {
    let field = |name: &str| {
        document.get_str(name).map(str::to_string).map_err(|e| {
            RepositoryError::Serialization(format!("Missing or invalid field {name}: {e}"))
        })
    };

    Ok(StoredRecord {
        partition_key: field(keys::PK)?,
        sort_key: field(keys::SK)?,
        payload: field(keys::PAYLOAD)?,
    })
}

/// Convert a document to a catalog item by decoding its payload.
pub fn document_to_catalog_item(document: &Document) -> Result<CatalogItem, RepositoryError> {
    document_to_record(document)?.decode()
}
