//! HTTP server initialization and runtime setup.
//!
//! Builds the link store, binds the listener and runs the accept loop.

use crate::acceptor::ConnectionAcceptor;
use crate::application::services::LinkStore;
use crate::config::Config;
use crate::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link storage (PostgreSQL with migrations, or in-memory)
/// - The shared [`LinkStore`]
/// - The TCP listener and accept loop
///
/// Returns only on a startup failure; once listening it serves until the
/// process is terminated.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails after all retries
/// - Migrations fail
/// - Server bind fails
pub async fn run(config: Config) -> Result<()> {
    let link_store = Arc::new(build_link_store(&config).await?);
    let state = AppState::new(link_store);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    serve(listener, state).await
}

/// Serves the application on an already bound listener.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(ConnectionAcceptor::new(listener), app_router(state)).await?;
    Ok(())
}

async fn build_link_store(config: &Config) -> Result<LinkStore> {
    if config.uses_memory_storage() {
        tracing::warn!("Using in-memory storage; links are lost on restart");
        return Ok(LinkStore::new(MemoryLinkRepository::new()));
    }

    let pool = connect_with_retry(config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;

    Ok(LinkStore::new(PgLinkRepository::new(Arc::new(pool))))
}

/// Opens the connection pool, retrying while the database comes up.
async fn connect_with_retry(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout));

    let strategy =
        FixedInterval::from_millis(config.db_retry_delay_ms).take(config.db_connect_retries);

    Retry::spawn(strategy, || {
        let options = options.clone();
        async move {
            options
                .connect(&config.database_url)
                .await
                .inspect_err(|e| tracing::warn!("Database connection attempt failed: {}", e))
        }
    })
    .await
    .context("Failed to connect to database")
}
