use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::Config;

pub mod participants_repo;

/// Opens the store pool and makes sure the collection exists.
///
/// The pool is the only handle to the store; callers own it and are expected
/// to `close()` it on shutdown.
pub async fn connect(config: &Config) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await?;

    participants_repo::ensure_schema(&pool).await?;
    info!(
        max_connections = config.max_connections,
        "store connected"
    );
    Ok(pool)
}

/// Single-connection in-memory store. Every connection to `sqlite::memory:`
/// is a separate database, so the pool is pinned to one connection that never
/// expires.
pub async fn connect_in_memory() -> sqlx::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await?;

    participants_repo::ensure_schema(&pool).await?;
    Ok(pool)
}
