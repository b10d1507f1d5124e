mod error;
mod http_mapping;
pub mod keys;
mod policy;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use policy::{collect_listing, DecodeFailurePolicy};
pub use traits::CatalogRepository;
pub use types::StoredRecord;
