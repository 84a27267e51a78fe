//! Data Transfer Objects for the HTTP API.

pub mod response;
pub mod shorten;

pub use response::ApiResponse;
pub use shorten::ShortenRequest;
