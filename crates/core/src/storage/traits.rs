use async_trait::async_trait;

use crate::catalog::CatalogItem;

use super::Result;

/// Repository for product operations.
///
/// Implementations hold a long-lived backend handle and are shared across
/// requests as `Arc<dyn CatalogRepository>`. Every method is a single round
/// trip to the backend; nothing is retried here.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Stores an item under its id, overwriting any record with the same id.
    ///
    /// The id must already be assigned.
    async fn add_item(&self, item: &CatalogItem) -> Result<()>;

    /// Gets an item by its id.
    ///
    /// Returns `RepositoryError::NotFound` when no record has that id.
    async fn get_item(&self, id: &str) -> Result<CatalogItem>;

    /// Gets every item in the catalog, in backend iteration order.
    ///
    /// Records that fail to decode are handled by the repository's
    /// [`DecodeFailurePolicy`](super::DecodeFailurePolicy).
    async fn get_all_items(&self) -> Result<Vec<CatalogItem>>;

    /// Releases the backend connection. Called once at shutdown.
    async fn close(&self) {}
}
