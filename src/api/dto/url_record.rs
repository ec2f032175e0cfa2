//! Shared response shape for stored URL records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// JSON view of a stored record, returned by both encode and decode.
///
/// Clients compare `created_at` and `last_accessed` to tell whether a call
/// created the encoding (equal) or hit a stored one (diverged).
#[derive(Debug, Serialize)]
pub struct UrlRecordResponse {
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
}

impl From<UrlRecord> for UrlRecordResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            long_url: record.long_url,
            short_url: record.short_url,
            created_at: record.created_at,
            last_accessed: record.last_accessed,
        }
    }
}
