//! API route configuration.

use crate::api::handlers::{invalid_request_handler, resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{MethodRouter, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /shorten`        - Create a short code
/// - `GET  /shorten/{code}` - Redirect to the stored URL
///
/// Any other method on these paths, HEAD included, is answered by
/// [`invalid_request_handler`]. Routing looks at the path only, so a query
/// string is ignored. `/shorten/` with no code is routed to the lookup so
/// that it answers 404 like any unknown code.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shorten",
            post(shorten_handler).fallback(invalid_request_handler),
        )
        .route("/shorten/", lookup())
        .route("/shorten/{*code}", lookup())
}

/// GET only. axum hands HEAD to a `get` handler unless HEAD has its own
/// endpoint.
fn lookup() -> MethodRouter<AppState> {
    get(resolve_handler)
        .head(invalid_request_handler)
        .fallback(invalid_request_handler)
}
