//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /encode`         - Shorten a long URL
//! - `GET  /decode`         - Resolve a short URL
//! - `PUT  /update-prefix`  - Change the domain prefix
//! - `GET  /health`         - Health check: registry size, current prefix
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/encode/` and
//!   `/encode` hit the same handler

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::operation_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
