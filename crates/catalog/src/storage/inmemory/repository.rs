//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::catalog::CatalogItem;
use catalog_core::storage::{
    collect_listing, keys, CatalogRepository, DecodeFailurePolicy, RepositoryError, Result,
    StoredRecord,
};

/// Composite (partition key, sort key) address of a record.
type RecordKey = (String, String);

fn to_record((partition_key, sort_key): &RecordKey, payload: &str) -> StoredRecord {
    StoredRecord {
        partition_key: partition_key.clone(),
        sort_key: sort_key.clone(),
        payload: payload.to_string(),
    }
}

/// In-memory storage backend.
///
/// Stores the encoded payload rather than the item itself so that reads go
/// through the same decode path as the real backends.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    records: Arc<RwLock<BTreeMap<RecordKey, String>>>,
    decode_failure_policy: DecodeFailurePolicy,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            decode_failure_policy: DecodeFailurePolicy::default(),
        }
    }

    /// Sets the policy used by listings for records that fail to decode.
    pub fn with_decode_failure_policy(mut self, policy: DecodeFailurePolicy) -> Self {
        self.decode_failure_policy = policy;
        self
    }

    /// Stores a raw payload under a product key, bypassing encoding.
    #[cfg(test)]
    pub async fn insert_raw(&self, id: &str, payload: &str) {
        self.records.write().await.insert(
            (keys::product_pk().to_string(), keys::product_sk(id)),
            payload.to_string(),
        );
    }
}

#[async_trait]
impl CatalogRepository for InMemoryRepository {
    async fn add_item(&self, item: &CatalogItem) -> Result<()> {
        let record = StoredRecord::for_item(item)?;

        let mut records = self.records.write().await;
        records.insert((record.partition_key, record.sort_key), record.payload);
        Ok(())
    }

    async fn get_item(&self, id: &str) -> Result<CatalogItem> {
        let records = self.records.read().await;
        let key = (keys::product_pk().to_string(), keys::product_sk(id));

        let payload = records
            .get(&key)
            .ok_or_else(|| RepositoryError::product_not_found(id))?;

        to_record(&key, payload).decode()
    }

    async fn get_all_items(&self) -> Result<Vec<CatalogItem>> {
        let records = self.records.read().await;

        let decoded = records
            .iter()
            .map(|(key, payload)| to_record(key, payload))
            .filter(StoredRecord::is_product)
            .map(|record| record.decode());

        collect_listing(decoded, self.decode_failure_policy)
    }
}
