//! Repository trait for short link persistence.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable key-value store of short code to long URL.
///
/// Callers never reach an implementation directly; every access goes through
/// [`crate::application::services::LinkStore`], which serializes them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts the link, overwriting any existing mapping for the same code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backend fails.
    async fn put(&self, link: &Link) -> Result<(), AppError>;

    /// Looks a link up by exact short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backend fails.
    async fn get(&self, short_code: &str) -> Result<Option<Link>, AppError>;
}
