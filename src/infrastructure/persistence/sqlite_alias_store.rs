//! SQLite implementation of the alias store.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Alias, NewUrlRecord, RecordId, UrlRecord};
use crate::domain::repositories::AliasStore;
use crate::error::StoreError;
use crate::utils::db_error::is_unique_violation;

/// SQLite repository for URL records.
///
/// Each operation is a single statement. Alias uniqueness comes from the
/// `UNIQUE` constraint on `url.alias`; SQLite's write lock serializes
/// concurrent inserts of the same alias so exactly one of them commits.
pub struct SqliteAliasStore {
    pool: Arc<SqlitePool>,
}

impl SqliteAliasStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Looks up the full record for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this alias.
    pub async fn find(&self, alias: &Alias) -> Result<UrlRecord, StoreError> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, alias, destination_url FROM url WHERE alias = ?1")
                .bind(alias.as_str())
                .fetch_optional(self.pool.as_ref())
                .await
                .map_err(StoreError::StorageFault)?;

        row.map(|(id, alias, destination_url)| {
            UrlRecord::new(RecordId::new(id), Alias::new(alias), destination_url)
        })
        .ok_or_else(|| StoreError::NotFound(alias.clone()))
    }

    /// Counts stored records.
    pub async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM url")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(StoreError::StorageFault)
    }

    /// Verifies that the database answers queries.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map(|_| ())
            .map_err(StoreError::StorageFault)
    }
}

#[async_trait]
impl AliasStore for SqliteAliasStore {
    async fn create(&self, new_record: NewUrlRecord) -> Result<RecordId, StoreError> {
        let result = sqlx::query("INSERT INTO url (alias, destination_url) VALUES (?1, ?2)")
            .bind(new_record.alias.as_str())
            .bind(new_record.destination_url.as_str())
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateAlias(new_record.alias.clone())
                } else {
                    StoreError::StorageFault(e)
                }
            })?;

        Ok(RecordId::new(result.last_insert_rowid()))
    }

    async fn resolve(&self, alias: &Alias) -> Result<String, StoreError> {
        if alias.is_empty() {
            return Err(StoreError::NotFound(alias.clone()));
        }

        let destination_url: Option<String> =
            sqlx::query_scalar("SELECT destination_url FROM url WHERE alias = ?1")
                .bind(alias.as_str())
                .fetch_optional(self.pool.as_ref())
                .await
                .map_err(StoreError::StorageFault)?;

        destination_url.ok_or_else(|| StoreError::NotFound(alias.clone()))
    }

    async fn delete(&self, alias: &Alias) -> Result<(), StoreError> {
        if alias.is_empty() {
            return Err(StoreError::NotFound(alias.clone()));
        }

        let result = sqlx::query("DELETE FROM url WHERE alias = ?1")
            .bind(alias.as_str())
            .execute(self.pool.as_ref())
            .await
            .map_err(StoreError::StorageFault)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(alias.clone()));
        }

        Ok(())
    }
}
