use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_core::catalog::DecodeError;
use catalog_core::storage::{repository_error_to_status_code, RepositoryError};

/// Application error type that wraps `anyhow::Error`.
///
/// Responds with a plain-text message. The status code comes from the
/// wrapped error: malformed payloads are 400, repository errors follow
/// `repository_error_to_status_code`, anything else is 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.downcast_ref::<DecodeError>().is_some() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let backend_failure = self
            .0
            .downcast_ref::<RepositoryError>()
            .is_some_and(RepositoryError::is_backend_failure);

        if backend_failure {
            tracing::error!(status = %status_code, error = %self.0, "Storage backend failure");
        } else if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
