//! MongoDB repository implementation.
//!
//! Implements `CatalogRepository` from `catalog_core::storage` using MongoDB.

use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use catalog_core::catalog::CatalogItem;
use catalog_core::storage::{
    collect_listing, CatalogRepository, DecodeFailurePolicy, RepositoryError, Result,
    StoredRecord,
};

use super::conversions::{
    document_to_catalog_item, partition_filter, product_filter, record_filter, record_to_document,
};
use super::error::{map_connection_error, map_operation_error};
use crate::config::MongoDbConfig;

/// MongoDB-based repository implementation.
///
/// Writes replace the document with the same key (upsert), so adding an item
/// twice leaves a single document, matching the DynamoDB backend.
pub struct MongoDbRepository {
    client: Client,
    collection: Collection<Document>,
    timeout: Duration,
    decode_failure_policy: DecodeFailurePolicy,
}

impl MongoDbRepository {
    /// Creates a new repository over an existing client and collection.
    pub fn new(client: Client, collection: Collection<Document>, timeout: Duration) -> Self {
        Self {
            client,
            collection,
            timeout,
            decode_failure_policy: DecodeFailurePolicy::default(),
        }
    }

    /// Sets the policy used by listings for records that fail to decode.
    pub fn with_decode_failure_policy(mut self, policy: DecodeFailurePolicy) -> Self {
        self.decode_failure_policy = policy;
        self
    }

    /// Connects to MongoDB and pings the database.
    ///
    /// The driver connects lazily, so the ping is what surfaces a bad
    /// connection string or unreachable server at startup.
    pub async fn connect(config: &MongoDbConfig, timeout: Duration) -> Result<Self> {
        let mut options = ClientOptions::parse(config.connection_string())
            .await
            .map_err(map_connection_error)?;
        options.app_name = Some("catalog".to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options).map_err(map_connection_error)?;
        let database = client.database(&config.database);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_connection_error)?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Connected to MongoDB"
        );

        let collection = database.collection::<Document>(&config.collection);
        Ok(Self::new(client, collection, timeout))
    }

    /// Get the collection name.
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// Runs a driver operation under the per-call deadline.
    async fn with_deadline<T, F>(&self, operation: &'static str, future: F) -> Result<T>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        match tokio::time::timeout(self.timeout, future).await {
            Ok(result) => result.map_err(map_operation_error),
            Err(_) => Err(RepositoryError::ConnectionFailed(format!(
                "MongoDB {operation} timed out after {:?}",
                self.timeout
            ))),
        }
    }
}

#[async_trait]
impl CatalogRepository for MongoDbRepository {
    async fn add_item(&self, item: &CatalogItem) -> Result<()> {
        let record = StoredRecord::for_item(item)?;

        self.with_deadline(
            "replaceOne",
            self.collection
                .replace_one(record_filter(&record), record_to_document(&record))
                .upsert(true),
        )
        .await?;

        Ok(())
    }

    async fn get_item(&self, id: &str) -> Result<CatalogItem> {
        let document = self
            .with_deadline("findOne", self.collection.find_one(product_filter(id)))
            .await?;

        match document {
            Some(document) => document_to_catalog_item(&document),
            None => Err(RepositoryError::product_not_found(id)),
        }
    }

    async fn get_all_items(&self) -> Result<Vec<CatalogItem>> {
        let documents = self
            .with_deadline("find", async {
                let mut cursor = self.collection.find(partition_filter()).await?;
                let mut documents = Vec::new();
                while let Some(document) = cursor.try_next().await? {
                    documents.push(document);
                }
                Ok::<_, mongodb::error::Error>(documents)
            })
            .await?;

        tracing::debug!(
            count = documents.len(),
            collection = %self.collection_name(),
            "Fetched product documents"
        );

        collect_listing(
            documents.iter().map(document_to_catalog_item),
            self.decode_failure_policy,
        )
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}
