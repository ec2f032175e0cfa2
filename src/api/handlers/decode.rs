//! Handler for the decode endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::decode::DecodeParams;
use crate::api::dto::url_record::UrlRecordResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short URL back to its stored record.
///
/// # Endpoint
///
/// `GET /decode?short_url=...`
///
/// The lookup is an exact key match on the full short URL; a hit refreshes
/// the record's `last_accessed` marker.
///
/// # Errors
///
/// Returns 400 Bad Request when `short_url` is not a valid URL and
/// 404 Not Found when it was never encoded.
pub async fn decode_handler(
    State(state): State<AppState>,
    Query(params): Query<DecodeParams>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let record = state.shortener.decode(&params.short_url).await?;

    Ok(Json(record.into()))
}
