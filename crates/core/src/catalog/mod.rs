mod codec;
mod error;
mod operations;
mod responses;
mod types;

pub use codec::{decode, encode, encode_to_string};
pub use error::DecodeError;
pub use operations::{assign_new_id, IdGenerator, UuidGenerator};
pub use responses::{AllCatalogItemsResponse, CatalogItemCreateResponse, CREATED_MESSAGE};
pub use types::CatalogItem;
