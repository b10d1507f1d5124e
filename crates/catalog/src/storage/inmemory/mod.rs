//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of `CatalogRepository`
//! that keeps encoded payloads in a `BTreeMap` wrapped in `Arc<RwLock<_>>`,
//! keyed the same way as the DynamoDB table. Useful for tests and for running
//! the service locally without any database.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
