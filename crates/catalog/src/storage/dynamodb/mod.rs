//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `CatalogRepository`
//! using `aws-sdk-dynamodb`. Products share the `PRODUCT` partition of a
//! single table, with the product id as sort key and the encoded item in the
//! `Payload` attribute.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
