//! SQLite persistence.
//!
//! Concrete implementation of the domain store trait using SQLx, plus pool
//! construction and embedded migrations.
//!
//! # Repositories
//!
//! - [`SqliteAliasStore`] - URL record storage and retrieval

pub mod sqlite_alias_store;

pub use sqlite_alias_store::SqliteAliasStore;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::DatabaseConfig;

/// Opens the connection pool described by `database` and applies migrations.
///
/// The database file is created if missing. WAL journaling lets readers
/// proceed while a writer holds the lock; the busy timeout makes concurrent
/// writers wait for the lock instead of failing immediately.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the database cannot be opened,
/// or a migration fails.
pub async fn open_pool(database: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&database.url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(database.connect_timeout));

    let pool = SqlitePoolOptions::new()
        .max_connections(database.max_connections)
        .acquire_timeout(Duration::from_secs(database.connect_timeout))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}
