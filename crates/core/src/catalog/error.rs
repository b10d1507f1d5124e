use thiserror::Error;

/// A payload could not be decoded into a [`CatalogItem`](super::CatalogItem).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid catalog item payload: {0}")]
pub struct DecodeError(pub String);

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}
