//! HTTP request handlers.
//!
//! Each handler invokes at most one link store operation.

pub mod fallback;
pub mod resolve;
pub mod shorten;

pub use fallback::invalid_request_handler;
pub use resolve::resolve_handler;
pub use shorten::shorten_handler;
