//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::domain::entities::Alias;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its destination URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Answers `302 Found` with the stored URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let destination_url = state
        .shortening_service
        .resolve(&Alias::new(alias))
        .await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, destination_url)]))
}
