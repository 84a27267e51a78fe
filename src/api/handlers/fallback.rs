//! Handler for requests that match no route.

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Rejects any method and target outside the API.
///
/// Returns 400 with
/// `{"status":"error","message":"Invalid request method or target"}`.
pub async fn invalid_request_handler(method: Method, uri: Uri) -> AppError {
    AppError::protocol(format!("{method} {uri}"))
}
