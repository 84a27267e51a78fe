//! Handler for link shortening endpoint.

use axum::{Json, body::Bytes, extract::State};

use crate::api::dto::{ApiResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "http://example.com", "short_path": "abc" }
/// ```
///
/// `short_path` is optional; without it a code is generated.
///
/// # Response
///
/// ```json
/// { "status": "success", "short_url": "abc" }
/// ```
///
/// # Errors
///
/// A missing or empty `url`, a taken `short_path` and storage failures all
/// produce 500 with `{"status":"error","message":"Server error"}`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse>, AppError> {
    let request = ShortenRequest::from_body(&body);

    let long_url = request
        .url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::validation("Missing URL in request body"))?;

    let code = state
        .link_store
        .shorten(&long_url, request.short_path.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(code)))
}
