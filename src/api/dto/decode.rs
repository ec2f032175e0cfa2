//! DTOs for the decode endpoint.

use serde::Deserialize;

/// Query parameters for resolving a short URL.
#[derive(Debug, Deserialize)]
pub struct DecodeParams {
    /// Short version of an encoded URL to resolve back to its original.
    pub short_url: String,
}
