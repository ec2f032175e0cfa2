//! Business logic services for the application layer.

pub mod shortener_service;

pub use shortener_service::{MAX_PREFIX_LEN, PrefixChange, ShortenerService};
