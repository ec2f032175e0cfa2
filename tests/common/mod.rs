#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use shorty::application::services::ShortenerService;
use shorty::infrastructure::persistence::MemoryUrlRepository;
use shorty::state::AppState;

pub const TEST_PREFIX: &str = "https://shor.ty/";

pub fn create_test_state() -> AppState {
    create_test_state_with_prefix(TEST_PREFIX)
}

pub fn create_test_state_with_prefix(prefix: &str) -> AppState {
    let repository = Arc::new(MemoryUrlRepository::new());
    let shortener = Arc::new(ShortenerService::new(repository, prefix.to_string(), 6));

    AppState::new(shortener)
}

/// Router with all operation routes, for tests exercising several endpoints.
pub fn operations_app(state: AppState) -> Router {
    shorty::api::routes::operation_routes().with_state(state)
}

/// Parses an RFC 3339 timestamp out of a JSON response field.
pub fn parse_timestamp(value: &serde_json::Value) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&chrono::Utc)
}
