//! Storage backend implementations.
//!
//! This module provides concrete implementations of `CatalogRepository` from
//! `catalog_core::storage`. The backend is chosen at startup with
//! `--backend`; the external engines are compiled in through feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `mongodb` (default): MongoDB backend using the `mongodb` driver
//!
//! The in-memory backend is always available.
//!
//! # Examples
//!
//! Build with DynamoDB only:
//! ```bash
//! cargo build -p catalog --no-default-features --features dynamodb
//! ```

use std::sync::Arc;

use anyhow::Result;
use catalog_core::storage::CatalogRepository;

use crate::config::{Backend, Config};

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "dynamodb")]
pub use self::dynamodb::DynamoDbRepository;

#[cfg(feature = "mongodb")]
pub use self::mongodb::MongoDbRepository;

/// Open the selected backend.
///
/// Connection failures are returned to the caller, which treats them as
/// fatal: the service cannot answer anything without its store.
pub async fn connect(backend: Backend, config: &Config) -> Result<Arc<dyn CatalogRepository>> {
    let policy = config.decode_failure_policy;

    let repo: Arc<dyn CatalogRepository> = match backend {
        Backend::Memory => {
            tracing::warn!("Using in-memory storage, data will be lost on exit");
            Arc::new(InMemoryRepository::new().with_decode_failure_policy(policy))
        }
        #[cfg(feature = "dynamodb")]
        Backend::Dynamodb => {
            let repo = DynamoDbRepository::connect(&config.dynamodb, config.request_timeout())
                .await?
                .with_decode_failure_policy(policy);
            tracing::info!(table = %repo.table_name(), %policy, "DynamoDB storage ready");
            Arc::new(repo)
        }
        #[cfg(feature = "mongodb")]
        Backend::Mongodb => {
            let repo = MongoDbRepository::connect(&config.mongodb, config.request_timeout())
                .await?
                .with_decode_failure_policy(policy);
            tracing::info!(collection = %repo.collection_name(), %policy, "MongoDB storage ready");
            Arc::new(repo)
        }
        #[allow(unreachable_patterns)]
        other => anyhow::bail!(
            "Storage backend '{other}' is not compiled in. Rebuild with `--features {other}`"
        ),
    };

    Ok(repo)
}
