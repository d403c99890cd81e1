//! Connection pool and schema migrations.

use std::str::FromStr;

use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens a pool for the configured SQLite database.
///
/// In-memory databases live only as long as their connection, so they get a
/// single connection that is never recycled.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let mut options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(config.create_if_missing)
        .foreign_keys(true);

    let mut pool = SqlitePoolOptions::new().acquire_timeout(config.acquire_timeout());
    if config.is_in_memory() {
        pool = pool.max_connections(1).idle_timeout(None).max_lifetime(None);
    } else {
        options = options.journal_mode(SqliteJournalMode::Wal);
        pool = pool.max_connections(config.max_connections);
    }

    pool.connect_with(options).await
}

/// Applies the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Wraps a driver error with the operation that failed.
pub(crate) fn database_error(operation: &str, err: sqlx::Error) -> DomainError {
    DomainError::database(format!("Failed to {}: {}", operation, err))
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..Default::default()
    };
    let pool = connect(&config).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}
