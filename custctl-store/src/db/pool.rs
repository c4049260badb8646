//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

use crate::config::StoreConfig;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a SQLite connection pool from store configuration.
///
/// The database file is created if it does not exist. The `customers` table
/// itself is expected to be provisioned by the caller.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&StoreConfig::from_env()).await?;
/// ```
pub async fn create_pool(config: &StoreConfig) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(
        &config.database_url,
        config.max_connections,
        config.acquire_timeout(),
    )
    .await
}

/// Create a SQLite connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - SQLite connection URL, e.g. `sqlite://data/customers.db`
/// * `max_connections` - Maximum number of connections in the pool
/// * `acquire_timeout` - How long to wait for a free connection
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(BUSY_TIMEOUT)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await?;

    tracing::debug!(max_connections, "sqlite pool ready");
    Ok(pool)
}
