use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_default;

/// A sellable product as stored in the catalog.
///
/// The serialized field names are the wire contract shared by the HTTP API
/// and every storage backend's payload, so they must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Assigned by the service on creation. Empty until then.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub id: String,
    pub name: String,
    /// Short description suited for point of sale or mobile apps.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub short_description: String,
    /// Longer description suited for websites.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub image_url1: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub image_url2: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub image_url3: String,
    /// Monetary value. No currency, no range validation.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub price: f32,
    /// Sorting hints for front-end displays.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tags: Vec<String>,
}

impl CatalogItem {
    /// Creates an item with the given name, no id and every other field empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            short_description: String::new(),
            description: String::new(),
            image_url1: String::new(),
            image_url2: String::new(),
            image_url3: String::new(),
            price: 0.0,
            tags: Vec::new(),
        }
    }

    /// Sets a specific ID for this item (useful for testing and seeding).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_price(mut self, price: f32) -> Self {
        self.price = price;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true once the service has assigned an identifier.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}
