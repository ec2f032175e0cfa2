//! Handler for the domain-prefix update endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::prefix::{PrefixUpdateParams, PrefixUpdateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Changes the domain prefix used for future encodings.
///
/// # Endpoint
///
/// `PUT /update-prefix?domain_prefix=...`
///
/// The prefix is normalized before storing: a trailing `/` is appended when
/// absent and the scheme is forced to `https`. Records encoded earlier keep
/// their original short URL.
///
/// # Response
///
/// ```json
/// { "old_prefix": "https://shor.ty/", "new_prefix": "https://brief.ly/" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the input is not a valid URL or exceeds
/// 20 characters.
pub async fn update_prefix_handler(
    State(state): State<AppState>,
    Query(params): Query<PrefixUpdateParams>,
) -> Result<Json<PrefixUpdateResponse>, AppError> {
    let change = state.shortener.update_prefix(&params.domain_prefix).await?;

    Ok(Json(PrefixUpdateResponse {
        old_prefix: change.old_prefix,
        new_prefix: change.new_prefix,
    }))
}
