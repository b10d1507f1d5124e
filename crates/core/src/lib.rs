//! Core types for the catalog service.
//!
//! - [`catalog`]: the product record, its JSON wire encoding and the response envelopes.
//! - [`storage`]: the repository contract every storage backend implements.
//!
//! Nothing in this crate performs I/O.

pub mod catalog;
pub mod serde;
pub mod storage;
