//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::MemoryUrlRepository;

/// Cloneable handler state.
///
/// The service (and through it the registry and the domain prefix) is shared
/// across all request handlers; cloning the state clones only the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<MemoryUrlRepository>>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService<MemoryUrlRepository>>) -> Self {
        Self { shortener }
    }
}
