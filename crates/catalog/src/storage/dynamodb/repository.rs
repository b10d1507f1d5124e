//! DynamoDB repository implementation.
//!
//! Implements `CatalogRepository` from `catalog_core::storage` using DynamoDB.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::timeout::TimeoutConfig;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use catalog_core::catalog::CatalogItem;
use catalog_core::storage::{
    collect_listing, keys, CatalogRepository, DecodeFailurePolicy, RepositoryError, Result,
    StoredRecord,
};

use super::conversions::{item_to_catalog_item, product_key, record_key};
use super::error::{map_describe_table_error, map_sdk_error};
use crate::config::DynamoDbConfig;

/// DynamoDB-based repository implementation.
///
/// The SDK client is cheap to clone and safe to share across requests.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    decode_failure_policy: DecodeFailurePolicy,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            decode_failure_policy: DecodeFailurePolicy::default(),
        }
    }

    /// Sets the policy used by listings for records that fail to decode.
    pub fn with_decode_failure_policy(mut self, policy: DecodeFailurePolicy) -> Self {
        self.decode_failure_policy = policy;
        self
    }

    /// Creates a client from configuration and checks that the table exists.
    ///
    /// Uses the AWS SDK default credential chain. Every operation is bounded
    /// by `timeout`.
    pub async fn connect(config: &DynamoDbConfig, timeout: Duration) -> Result<Self> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .timeout_config(TimeoutConfig::builder().operation_timeout(timeout).build());

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        let client = Client::new(&sdk_config);

        client
            .describe_table()
            .table_name(&config.table_name)
            .send()
            .await
            .map_err(|e| map_describe_table_error(e, &config.table_name))?;

        tracing::info!(
            table = %config.table_name,
            region = %config.region,
            endpoint = ?config.endpoint_url,
            "Connected to DynamoDB"
        );

        Ok(Self::new(client, config.table_name.clone()))
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl CatalogRepository for DynamoDbRepository {
    async fn add_item(&self, item: &CatalogItem) -> Result<()> {
        let record = StoredRecord::for_item(item)?;

        self.client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(record_key(&record)))
            .update_expression(format!("SET {} = :payload", keys::PAYLOAD))
            .expression_attribute_values(":payload", AttributeValue::S(record.payload))
            .send()
            .await
            .map_err(|e| map_sdk_error("UpdateItem", e))?;

        Ok(())
    }

    async fn get_item(&self, id: &str) -> Result<CatalogItem> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(product_key(id)))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| map_sdk_error("GetItem", e))?;

        match result.item {
            Some(item) => item_to_catalog_item(&item),
            None => Err(RepositoryError::product_not_found(id)),
        }
    }

    async fn get_all_items(&self) -> Result<Vec<CatalogItem>> {
        let mut items = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression(format!("{} = :type", keys::PK))
                .expression_attribute_values(
                    ":type",
                    AttributeValue::S(keys::product_pk().to_string()),
                )
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(|e| map_sdk_error("Query", e))?;

            let page = result.items.unwrap_or_default();
            items.extend(collect_listing(
                page.iter().map(item_to_catalog_item),
                self.decode_failure_policy,
            )?);

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(count = items.len(), table = %self.table_name, "Listed products");

        Ok(items)
    }
}
