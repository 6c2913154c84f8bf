//! Alias assignment and lookup service.

use std::sync::Arc;

use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, info, warn};

use crate::domain::entities::{Alias, NewUrlRecord, RecordId};
use crate::domain::generator::AliasGenerator;
use crate::domain::repositories::AliasStore;
use crate::error::StoreError;
use crate::utils::alias_generator::DEFAULT_ALIAS_LENGTH;

/// Create attempts allowed for a generated alias when not configured.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// How aliases are generated when the caller does not supply one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasPolicy {
    /// Length of generated aliases.
    pub length: usize,
    /// Total create attempts for a generated alias, the first one included.
    /// `1` surfaces the first collision to the caller.
    pub max_attempts: usize,
}

impl Default for AliasPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_ALIAS_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Outcome of a successful [`ShorteningService::shorten`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub id: RecordId,
    /// The alias actually stored: the caller's, or the generated one.
    pub alias: Alias,
}

/// Service for creating, resolving and deleting aliases.
///
/// Alias uniqueness is left entirely to the store. The service only decides
/// which alias to submit and whether a collision on a generated alias is
/// worth another draw.
pub struct ShorteningService<S: AliasStore, G: AliasGenerator> {
    store: Arc<S>,
    generator: Arc<G>,
    policy: AliasPolicy,
}

impl<S: AliasStore, G: AliasGenerator> ShorteningService<S, G> {
    /// Creates a new shortening service.
    pub fn new(store: Arc<S>, generator: Arc<G>, policy: AliasPolicy) -> Self {
        Self {
            store,
            generator,
            policy,
        }
    }

    /// Stores `destination_url` under the preferred alias or a generated one.
    ///
    /// # Alias Selection
    ///
    /// - A non-empty `preferred_alias` is submitted as-is, exactly once
    /// - Otherwise a random alias of `policy.length` characters is generated;
    ///   on collision a fresh one is drawn, up to `policy.max_attempts` tries
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateAlias`] if the preferred alias is taken,
    /// or if every generated candidate collided.
    ///
    /// Returns [`StoreError::StorageFault`] on database errors; these are
    /// never retried.
    pub async fn shorten(
        &self,
        destination_url: &str,
        preferred_alias: Option<Alias>,
    ) -> Result<Shortened, StoreError> {
        match preferred_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => self.create(destination_url, alias).await,
            None => self.create_generated(destination_url).await,
        }
    }

    /// Returns the destination URL of `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the alias does not exist.
    pub async fn resolve(&self, alias: &Alias) -> Result<String, StoreError> {
        let destination_url = self.store.resolve(alias).await?;
        debug!(%alias, "alias resolved");
        Ok(destination_url)
    }

    /// Permanently removes `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the alias does not exist.
    pub async fn delete(&self, alias: &Alias) -> Result<(), StoreError> {
        self.store.delete(alias).await?;
        info!(%alias, "alias deleted");
        Ok(())
    }

    async fn create(&self, destination_url: &str, alias: Alias) -> Result<Shortened, StoreError> {
        let id = self
            .store
            .create(NewUrlRecord::new(alias.clone(), destination_url))
            .await?;

        info!(%id, %alias, "alias created");

        Ok(Shortened { id, alias })
    }

    async fn create_generated(&self, destination_url: &str) -> Result<Shortened, StoreError> {
        let retries = FixedInterval::from_millis(0).take(self.policy.max_attempts.saturating_sub(1));
        let length = self.policy.length;

        RetryIf::start(
            retries,
            move || self.create(destination_url, self.generator.generate(length)),
            |err: &StoreError| {
                let collided = err.is_duplicate_alias();
                if collided {
                    warn!(error = %err, "generated alias collided");
                }
                collided
            },
        )
        .await
    }
}
