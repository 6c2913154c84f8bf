//! Handler for alias deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::domain::entities::Alias;
use crate::error::AppError;
use crate::state::AppState;

/// Permanently removes an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist or was already deleted.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .shortening_service
        .delete(&Alias::new(alias))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
