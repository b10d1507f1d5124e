//! Response envelopes returned by the HTTP API. These are never persisted.

use serde::{Deserialize, Serialize};

use super::types::CatalogItem;

/// Message sent back after a successful create.
pub const CREATED_MESSAGE: &str = "Product created successfully!";

/// Reply to a create request, carrying the stored item with its new id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemCreateResponse {
    pub message: String,
    pub resource_id: CatalogItem,
    /// HTTP status code of the operation.
    pub status: u16,
}

impl CatalogItemCreateResponse {
    /// Builds the success response for a freshly stored item.
    pub fn created(item: CatalogItem) -> Self {
        Self {
            message: CREATED_MESSAGE.to_string(),
            resource_id: item,
            status: 200,
        }
    }
}

/// Reply to a list request. Order follows backend iteration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllCatalogItemsResponse {
    pub data: Vec<CatalogItem>,
}

impl AllCatalogItemsResponse {
    pub fn new(data: Vec<CatalogItem>) -> Self {
        Self { data }
    }
}
