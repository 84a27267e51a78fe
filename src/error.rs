//! Application error type and its HTTP mapping.
//!
//! Handlers return `Result<_, AppError>`; the [`IntoResponse`] impl decides the
//! status code and the JSON body for each error kind.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dto::ApiResponse;

pub const SERVER_ERROR_MESSAGE: &str = "Server error";
pub const NOT_FOUND_MESSAGE: &str = "Short URL not found";
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request method or target";

#[derive(Debug, Error)]
pub enum AppError {
    /// A required request field is missing or empty.
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested custom code is already mapped.
    #[error("conflict: {0}")]
    Conflict(String),

    /// No link exists for the requested code.
    #[error("not found: {0}")]
    NotFound(String),

    /// The persistence backend failed.
    #[error("storage error: {0}")]
    Storage(#[source] sqlx::Error),

    /// The request matched no known method and target.
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    /// HTTP status and client-facing message for this error.
    ///
    /// Validation and conflict failures are reported as generic server errors,
    /// the same way as storage failures.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) | AppError::Storage(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            AppError::Protocol(_) => (StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Storage(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(_) | AppError::Conflict(_) | AppError::Protocol(_) => {
                tracing::warn!("Request rejected: {}", self)
            }
            AppError::Storage(_) => tracing::error!("Request failed: {}", self),
            AppError::NotFound(_) => tracing::debug!("{}", self),
        }

        let (status, message) = self.status_and_message();

        (status, Json(ApiResponse::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_faults_surface_as_server_errors() {
        let (status, message) = AppError::validation("Missing URL").status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Server error");

        let (status, _) = AppError::conflict("taken").status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_error_is_server_error() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(err.status_and_message().0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_and_protocol_statuses() {
        assert_eq!(
            AppError::not_found("zzzz99").status_and_message(),
            (StatusCode::NOT_FOUND, "Short URL not found")
        );
        assert_eq!(
            AppError::protocol("PUT /").status_and_message(),
            (StatusCode::BAD_REQUEST, "Invalid request method or target")
        );
    }

    #[test]
    fn test_display_includes_detail() {
        let err = AppError::conflict("The specified short path already exists: abc");
        assert!(err.to_string().contains("abc"));
    }
}
