//! DTOs for the prefix-update endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters for changing the domain prefix.
#[derive(Debug, Deserialize)]
pub struct PrefixUpdateParams {
    /// New domain prefix; must be a valid URL of at most 20 characters.
    pub domain_prefix: String,
}

/// Response reporting the previous and the now-active prefix.
#[derive(Debug, Serialize)]
pub struct PrefixUpdateResponse {
    pub old_prefix: String,
    pub new_prefix: String,
}
