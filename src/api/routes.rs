//! API route configuration.

use crate::api::handlers::{decode_handler, encode_handler, update_prefix_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Registry operation routes.
///
/// # Endpoints
///
/// - `POST /encode`        - Shorten a long URL
/// - `GET  /decode`        - Resolve a short URL
/// - `PUT  /update-prefix` - Change the domain prefix for future encodings
pub fn operation_routes() -> Router<AppState> {
    Router::new()
        .route("/encode", post(encode_handler))
        .route("/decode", get(decode_handler))
        .route("/update-prefix", put(update_prefix_handler))
}
