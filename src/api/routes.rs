//! API route configuration.
//!
//! The `/url` endpoints require HTTP Basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Alias management routes, protected by Basic authentication.
///
/// # Endpoints
///
/// - `POST   /url`          - Store a URL under an alias
/// - `DELETE /url/{alias}`  - Remove an alias
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
}
