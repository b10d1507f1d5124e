use crate::catalog::{decode, encode_to_string, CatalogItem};

use super::keys;
use super::{RepositoryError, Result};

/// The persisted shape of a product, independent of the backend.
///
/// Backends map this onto their native representation: an attribute map
/// for DynamoDB, a document for MongoDB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub partition_key: String,
    pub sort_key: String,
    pub payload: String,
}

impl StoredRecord {
    /// Builds the record for an item.
    ///
    /// The item must already carry its id and have a finite price, since a
    /// NaN or infinite price cannot be stored in JSON.
    pub fn for_item(item: &CatalogItem) -> Result<Self> {
        if !item.has_id() {
            return Err(RepositoryError::InvalidData(
                "product id must be assigned before storing".to_string(),
            ));
        }
        if !item.price.is_finite() {
            return Err(RepositoryError::InvalidData(format!(
                "product {} has a non-finite price",
                item.id
            )));
        }

        Ok(Self {
            partition_key: keys::product_pk().to_string(),
            sort_key: keys::product_sk(&item.id),
            payload: encode_to_string(item),
        })
    }

    /// Decodes the payload back into an item.
    ///
    /// The decoded item must carry the id the record is stored under. A
    /// payload without an id, or with another record's id, is corrupt.
    pub fn decode(&self) -> Result<CatalogItem> {
        let item = decode(&self.payload)?;

        if !item.has_id() {
            return Err(RepositoryError::Serialization(format!(
                "record {} has no id in its payload",
                self.sort_key
            )));
        }
        if keys::product_sk(&item.id) != self.sort_key {
            return Err(RepositoryError::Serialization(format!(
                "record {} holds a payload for id {}",
                self.sort_key, item.id
            )));
        }

        Ok(item)
    }

    /// True when the record belongs to the product partition.
    pub fn is_product(&self) -> bool {
        self.partition_key == keys::PRODUCT_PARTITION
    }
}
