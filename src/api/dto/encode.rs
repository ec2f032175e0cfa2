//! DTOs for the encode endpoint.

use serde::Deserialize;

/// Request to encode a long URL.
#[derive(Debug, Deserialize)]
pub struct EncodeRequest {
    /// The long-form URL to shorten.
    pub long_url: String,
}
