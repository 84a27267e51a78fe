//! Link creation and resolution under a single store-wide lock.

use metrics::counter;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// The single owner of link persistence.
///
/// Built once at startup and shared through [`crate::state::AppState`]. The
/// repository lives inside the mutex, so every read and write goes through the
/// same lock and concurrent requests are served one storage call at a time.
pub struct LinkStore {
    repository: Mutex<Box<dyn LinkRepository>>,
}

impl LinkStore {
    /// Creates a store that owns `repository`.
    pub fn new(repository: impl LinkRepository + 'static) -> Self {
        Self {
            repository: Mutex::new(Box::new(repository)),
        }
    }

    /// Stores `long_url` and returns its short code.
    ///
    /// With a non-empty `custom_code` the code is used as is, unless it is
    /// already taken. Otherwise a code is derived from the URL and a random
    /// salt; a generated code is written without checking for an existing
    /// mapping, so a collision replaces the earlier link.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `long_url` is empty
    /// - [`AppError::Conflict`] if `custom_code` is already in use; nothing is written
    /// - [`AppError::Storage`] on backend failure
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_code: Option<&str>,
    ) -> Result<String, AppError> {
        if long_url.is_empty() {
            return Err(AppError::validation("Missing URL in request body"));
        }

        let repository = self.repository.lock().await;

        match custom_code.filter(|code| !code.is_empty()) {
            Some(code) => {
                if repository.get(code).await?.is_some() {
                    counter!("links_conflicts_total").increment(1);
                    return Err(AppError::conflict(format!(
                        "The specified short path already exists: {code}"
                    )));
                }

                repository.put(&Link::new(code, long_url)).await?;
                counter!("links_created_total", "kind" => "custom").increment(1);
                debug!(code, long_url, "Stored custom short code");

                Ok(code.to_string())
            }
            None => {
                let code = generate_code(long_url);

                repository.put(&Link::new(code.as_str(), long_url)).await?;
                counter!("links_created_total", "kind" => "generated").increment(1);
                debug!(code = %code, long_url, "Stored generated short code");

                Ok(code)
            }
        }
    }

    /// Returns the URL stored for `short_code`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failure.
    pub async fn resolve(&self, short_code: &str) -> Result<Option<String>, AppError> {
        let link = self.repository.lock().await.get(short_code).await?;

        let result = if link.is_some() { "hit" } else { "miss" };
        counter!("links_resolved_total", "result" => result).increment(1);
        debug!(short_code, result, "Resolved short code");

        Ok(link.map(|link| link.long_url))
    }
}
