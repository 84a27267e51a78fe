//! In-memory implementation of link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// A repository that keeps links in a process-local map.
///
/// Nothing survives a restart. Selected with `DATABASE_URL=memory://`.
///
/// # Use Cases
///
/// - Local development without PostgreSQL
/// - HTTP and store tests
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: DashMap<String, String>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        debug!("Using in-memory link storage");
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn put(&self, link: &Link) -> Result<(), AppError> {
        self.links
            .insert(link.short_code.clone(), link.long_url.clone());
        Ok(())
    }

    async fn get(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .get(short_code)
            .map(|entry| Link::new(short_code, entry.value().clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_code() {
        let repo = MemoryLinkRepository::new();

        let result = repo.get("nothing").await.unwrap();

        assert!(result.is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let repo = MemoryLinkRepository::new();

        repo.put(&Link::new("abc", "http://example.com"))
            .await
            .unwrap();

        let link = repo.get("abc").await.unwrap().unwrap();
        assert_eq!(link.long_url, "http://example.com");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_code() {
        let repo = MemoryLinkRepository::new();

        repo.put(&Link::new("abc", "http://first.com")).await.unwrap();
        repo.put(&Link::new("abc", "http://second.com"))
            .await
            .unwrap();

        let link = repo.get("abc").await.unwrap().unwrap();
        assert_eq!(link.long_url, "http://second.com");
        assert_eq!(repo.len(), 1);
    }
}
