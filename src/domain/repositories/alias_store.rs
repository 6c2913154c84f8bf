//! Repository trait for alias storage.

use crate::domain::entities::{Alias, NewUrlRecord, RecordId};
use crate::error::StoreError;
use async_trait::async_trait;

/// Durable, uniqueness-enforcing storage for URL records.
///
/// Every method is a single unit of work against the persistence layer.
/// Uniqueness is enforced by the backend's own constraint, so concurrent
/// creators need no coordination on the caller's side.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteAliasStore`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/store_sqlite.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasStore: Send + Sync {
    /// Persists a new record and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateAlias`] if the alias is already taken.
    /// The conflict is detected by the insert itself, never by a prior lookup.
    ///
    /// Returns [`StoreError::StorageFault`] on any other database error.
    async fn create(&self, new_record: NewUrlRecord) -> Result<RecordId, StoreError>;

    /// Returns the destination URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this alias.
    /// Returns [`StoreError::StorageFault`] on database errors.
    async fn resolve(&self, alias: &Alias) -> Result<String, StoreError>;

    /// Permanently removes the record stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row was removed.
    /// Returns [`StoreError::StorageFault`] on database errors.
    async fn delete(&self, alias: &Alias) -> Result<(), StoreError>;
}
