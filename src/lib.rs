//! # Alias Shortener
//!
//! A small URL aliasing service built with Axum and SQLite: store a URL under
//! a short alias, redirect through it, delete it.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the alias store and generator traits
//! - **Application Layer** ([`application`]) - Alias assignment and retry policy
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage.db"
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="secret"
//!
//! cargo run
//! ```
//!
//! Migrations are embedded and applied on startup.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasPolicy, Shortened, ShorteningService};
    pub use crate::domain::entities::{Alias, NewUrlRecord, RecordId, UrlRecord};
    pub use crate::domain::generator::AliasGenerator;
    pub use crate::domain::repositories::AliasStore;
    pub use crate::error::{AppError, StoreError};
    pub use crate::state::AppState;
}
