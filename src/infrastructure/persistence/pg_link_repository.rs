//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository backed by the `urls` table.
///
/// Values are always passed as bind parameters, never interpolated into SQL.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn put(&self, link: &Link) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO urls (short_url, long_url)
            VALUES ($1, $2)
            ON CONFLICT (short_url) DO UPDATE SET long_url = EXCLUDED.long_url
            "#,
        )
        .bind(&link.short_code)
        .bind(&link.long_url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn get(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let long_url: Option<String> =
            sqlx::query_scalar("SELECT long_url FROM urls WHERE short_url = $1")
                .bind(short_code)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(long_url.map(|long_url| Link::new(short_code, long_url)))
    }
}
