//! HTTP status codes for storage failures.

use super::RepositoryError;

/// Status code reported to clients when a repository call fails.
///
/// A missing product is the only 404 and bad input the only 400. An
/// unreachable backend is 503 so callers can tell an outage from a bug;
/// a rejected query or an undecodable stored payload is 500.
///
/// ```
/// use catalog_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::product_not_found("abc-123");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) | RepositoryError::Serialization(_) => 500,
    }
}
