//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The repository is a trait object so handlers do not
//! know which backend is serving them.

use std::sync::Arc;

use catalog_core::catalog::{IdGenerator, UuidGenerator};
use catalog_core::storage::CatalogRepository;

use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// This is cloned for each request handler. Both fields are reference
/// counted, so a clone is two pointer copies.
#[derive(Clone)]
pub struct AppState {
    /// Product repository (the only stateful collaborator).
    pub catalog_repo: Arc<dyn CatalogRepository>,
    /// Identifier source for newly created products.
    pub id_generator: Arc<dyn IdGenerator>,
}

impl AppState {
    /// Creates an AppState over the given repository with UUID v4 ids.
    pub fn new(catalog_repo: Arc<dyn CatalogRepository>) -> Self {
        Self {
            catalog_repo,
            id_generator: Arc::new(UuidGenerator),
        }
    }

    /// Replace the identifier generator.
    #[cfg(test)]
    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }
}

impl Default for AppState {
    /// In-memory storage, for tests and local runs.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
