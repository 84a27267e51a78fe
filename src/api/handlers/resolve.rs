//! Handler for short code lookup and redirect.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Path prefix in front of the short code.
pub const SHORTEN_PREFIX: &str = "/shorten/";

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /shorten/{code}`
///
/// The code is everything after the `/shorten/` prefix of the request path,
/// taken verbatim.
///
/// # Response
///
/// 301 Moved Permanently with `Location` set to the stored URL and body
/// `{"status":"success","short_url":"<code>"}`.
///
/// # Errors
///
/// Returns 404 with `{"status":"error","message":"Short URL not found"}` for
/// an unknown code.
pub async fn resolve_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let code = uri.path().strip_prefix(SHORTEN_PREFIX).unwrap_or_default();

    match state.link_store.resolve(code).await? {
        Some(long_url) => Ok((
            StatusCode::MOVED_PERMANENTLY,
            [(header::LOCATION, long_url)],
            Json(ApiResponse::success(code)),
        )
            .into_response()),
        None => Err(AppError::not_found(code)),
    }
}
