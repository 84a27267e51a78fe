//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`        - Create a short code
//! - `GET  /shorten/{code}` - Redirect to the stored URL
//! - anything else          - 400
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::invalid_request_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::routes()
        .fallback(invalid_request_handler)
        .with_state(state)
        .layer(tracing::layer())
}
