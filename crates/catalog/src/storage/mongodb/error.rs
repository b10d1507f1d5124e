//! MongoDB error mapping.
//!
//! Maps driver errors to `RepositoryError` from `catalog_core::storage`.

use catalog_core::storage::RepositoryError;
use mongodb::error::{Error, ErrorKind};

/// Map a driver error raised by a collection operation.
pub fn map_operation_error(err: Error) -> RepositoryError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::Authentication { .. } => RepositoryError::ConnectionFailed(err.to_string()),
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            RepositoryError::Serialization(err.to_string())
        }
        ErrorKind::InvalidArgument { .. } => RepositoryError::InvalidData(err.to_string()),
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Map any error raised while establishing the connection.
pub fn map_connection_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::ConnectionFailed(err.to_string())
}
