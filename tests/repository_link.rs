//! PostgreSQL adapter tests. They need `DATABASE_URL` pointing at a server
//! where `#[sqlx::test]` may create throwaway databases:
//!
//! ```bash
//! cargo test --test repository_link -- --ignored
//! ```

use sqlx::PgPool;
use std::sync::Arc;
use tinylink::application::services::LinkStore;
use tinylink::domain::entities::Link;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::PgLinkRepository;
use tinylink::AppError;

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_put_and_get(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.put(&Link::new("abc", "http://example.com"))
        .await
        .unwrap();

    let link = repo.get("abc").await.unwrap();
    assert_eq!(link, Some(Link::new("abc", "http://example.com")));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_get_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.get("notfound").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_put_overwrites(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    repo.put(&Link::new("abc", "http://first.com")).await.unwrap();
    repo.put(&Link::new("abc", "http://second.com"))
        .await
        .unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE short_url = $1")
        .bind("abc")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let link = repo.get("abc").await.unwrap().unwrap();
    assert_eq!(link.long_url, "http://second.com");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_values_are_not_interpolated(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let url = "http://example.com/?q=it's";

    repo.put(&Link::new("quote'd", url)).await.unwrap();

    assert_eq!(repo.get("quote'd").await.unwrap().unwrap().long_url, url);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_store_conflict_over_postgres(pool: PgPool) {
    let store = LinkStore::new(PgLinkRepository::new(Arc::new(pool)));

    store
        .shorten("http://example.com", Some("abc"))
        .await
        .unwrap();
    let result = store.shorten("http://other.com", Some("abc")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(
        store.resolve("abc").await.unwrap().as_deref(),
        Some("http://example.com")
    );
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_storage_failure_after_close(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    pool.close().await;

    let result = repo.get("abc").await;

    assert!(matches!(result, Err(AppError::Storage(_))));
}
