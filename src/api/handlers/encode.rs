//! Handler for the encode endpoint.

use axum::{Json, extract::State};

use crate::api::dto::encode::EncodeRequest;
use crate::api::dto::url_record::UrlRecordResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Encodes a long URL into a corresponding shorter version of itself.
///
/// # Endpoint
///
/// `POST /encode`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/some/very/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "long_url": "https://example.com/some/very/long/path",
///   "short_url": "https://shor.ty/aB3xY9",
///   "created_at": "2026-08-06T12:00:00Z",
///   "last_accessed": "2026-08-06T12:00:00Z"
/// }
/// ```
///
/// Re-encoding a known URL returns the stored record: diverging timestamps
/// mean the call hit a cached encoding rather than creating one.
///
/// # Errors
///
/// Returns 400 Bad Request when the body is not a valid URL.
pub async fn encode_handler(
    State(state): State<AppState>,
    Json(payload): Json<EncodeRequest>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let record = state.shortener.encode(&payload.long_url).await?;

    Ok(Json(record.into()))
}
