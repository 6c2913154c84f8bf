//! Shared application state injected into HTTP handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::api::middleware::auth::Credentials;
use crate::application::services::{AliasPolicy, ShorteningService};
use crate::infrastructure::persistence::SqliteAliasStore;
use crate::utils::alias_generator::RandomAliasGenerator;

/// The service wired with its production store and generator.
pub type AppShorteningService = ShorteningService<SqliteAliasStore, RandomAliasGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<AppShorteningService>,
    /// Direct store handle for maintenance queries (health checks).
    pub store: Arc<SqliteAliasStore>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    /// Wires the store, generator and service on top of `pool`.
    pub fn new(pool: Arc<SqlitePool>, policy: AliasPolicy, credentials: Credentials) -> Self {
        let store = Arc::new(SqliteAliasStore::new(pool));
        let shortening_service = Arc::new(ShorteningService::new(
            store.clone(),
            Arc::new(RandomAliasGenerator::new()),
            policy,
        ));

        Self {
            shortening_service,
            store,
            credentials: Arc::new(credentials),
        }
    }
}
