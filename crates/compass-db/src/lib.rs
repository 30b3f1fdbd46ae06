//! Niche Compass database layer.
//!
//! Thin wrapper over a Redis connection manager. Analysis results are never
//! persisted; the handle exists so the health endpoint can report
//! connectivity, and the service runs fine without one.

use redis::aio::ConnectionManager;
use thiserror::Error;

/// Database error types.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    Connection(#[from] redis::RedisError),
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Database handle — ConnectionManager multiplexes internally and is Clone,
/// so callers clone it to get a mutable handle per operation.
pub type DbPool = ConnectionManager;

/// Initialize a database pool from a Redis URL.
///
/// Example URL: `redis://127.0.0.1:6379`
pub async fn init_pool(redis_url: &str) -> DbResult<DbPool> {
    let client = redis::Client::open(redis_url)?;
    let manager = ConnectionManager::new(client).await?;
    Ok(manager)
}

/// Initialize a pool reading REDIS_URL from the environment (or the default).
pub async fn init_pool_from_env() -> DbResult<DbPool> {
    let url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
    init_pool(&url).await
}

/// Check liveness of the database connection.
pub async fn ping(pool: &DbPool) -> DbResult<()> {
    let mut conn = pool.clone();
    let _: String = redis::cmd("PING").query_async(&mut conn).await?;
    Ok(())
}
