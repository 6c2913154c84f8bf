//! Handler for alias creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::domain::entities::Alias;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a destination URL under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "my-link"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "alias": "my-link",
///   "url": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: invalid URL or alias shape
/// - **409 Conflict**: alias already taken
/// - **500 Internal Server Error**: storage fault
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    payload.validate()?;

    let shortened = state
        .shortening_service
        .shorten(&payload.url, payload.alias.map(Alias::new))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            alias: shortened.alias.into_inner(),
            url: payload.url,
        }),
    ))
}
