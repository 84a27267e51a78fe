//! HTTP layer for request/response handling.
//!
//! This layer translates HTTP requests into link store operations and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Request parsing and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
