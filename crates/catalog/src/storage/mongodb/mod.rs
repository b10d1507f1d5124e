//! MongoDB storage backend implementation.
//!
//! This module provides a MongoDB-based implementation of `CatalogRepository`
//! using the `mongodb` driver. Each product is one document carrying the same
//! `PK`/`SK` key fields as the DynamoDB table plus the encoded `Payload`.

mod conversions;
mod error;
mod repository;

pub use repository::MongoDbRepository;
