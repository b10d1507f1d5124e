//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `catalog_core::storage`.
//! Requests that never got a service response are connectivity failures;
//! everything the service rejected is a query failure.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use catalog_core::storage::RepositoryError;

/// Map an SDK error from any data-plane operation to RepositoryError.
pub fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> RepositoryError
where
    E: ProvideErrorMetadata + Debug,
    R: Debug,
{
    match &err {
        SdkError::TimeoutError(_) => {
            return RepositoryError::ConnectionFailed(format!("DynamoDB {operation} timed out"));
        }
        SdkError::DispatchFailure(failure) => {
            return RepositoryError::ConnectionFailed(format!(
                "DynamoDB {operation} dispatch failure: {failure:?}"
            ));
        }
        _ => {}
    }

    let message = match err.code() {
        Some("ResourceNotFoundException") => "Table not found".to_string(),
        Some("ProvisionedThroughputExceededException") => {
            "Throughput exceeded, please retry".to_string()
        }
        Some("RequestLimitExceeded") => "Request limit exceeded, please retry".to_string(),
        Some("ItemCollectionSizeLimitExceededException") => {
            "Item collection size limit exceeded".to_string()
        }
        Some("TransactionConflictException") => "Transaction conflict, please retry".to_string(),
        Some("InternalServerError") => "DynamoDB internal server error".to_string(),
        _ => format!("{operation} failed: {err:?}"),
    };

    RepositoryError::QueryFailed(message)
}

/// Map the startup DescribeTable check. Any failure here means the service
/// cannot use its table, so it is reported as a connection failure.
pub fn map_describe_table_error<E, R>(err: SdkError<E, R>, table_name: &str) -> RepositoryError
where
    E: ProvideErrorMetadata + Debug,
    R: Debug,
{
    match map_sdk_error("DescribeTable", err) {
        RepositoryError::QueryFailed(message) if message == "Table not found" => {
            RepositoryError::ConnectionFailed(format!("Table '{table_name}' not found"))
        }
        RepositoryError::QueryFailed(message) => RepositoryError::ConnectionFailed(message),
        other => other,
    }
}
