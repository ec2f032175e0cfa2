//! URL record entity representing one shortened-URL mapping.

use chrono::{DateTime, Utc};

/// A stored long-URL / short-URL pair with access-time tracking.
///
/// `short_url` is the registry key, built as `domain_prefix + code` at
/// encoding time. Later prefix changes never rewrite stored records, so a
/// record keeps the prefix it was encoded under for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    /// Canonical long-form URL, trailing whitespace stripped.
    pub long_url: String,
    /// Full short URL; globally unique.
    pub short_url: String,
    /// Set once, at the first encoding of the long URL.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful encode hit or decode.
    pub last_accessed: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a record at its first encoding; both timestamps start equal,
    /// which lets clients tell a fresh encoding from a cached one.
    pub fn new(long_url: String, short_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            long_url,
            short_url,
            created_at,
            last_accessed: created_at,
        }
    }

    /// Refreshes the last-accessed marker.
    pub fn touch(&mut self, accessed_at: DateTime<Utc>) {
        self.last_accessed = accessed_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_record_timestamps_start_equal() {
        let now = Utc::now();
        let record = UrlRecord::new(
            "https://example.com".to_string(),
            "https://shor.ty/abc123".to_string(),
            now,
        );

        assert_eq!(record.long_url, "https://example.com");
        assert_eq!(record.short_url, "https://shor.ty/abc123");
        assert_eq!(record.created_at, now);
        assert_eq!(record.last_accessed, now);
    }

    #[test]
    fn test_touch_updates_only_last_accessed() {
        let created = Utc::now();
        let mut record = UrlRecord::new(
            "https://example.com".to_string(),
            "https://shor.ty/abc123".to_string(),
            created,
        );

        let later = created + Duration::seconds(42);
        record.touch(later);

        assert_eq!(record.created_at, created);
        assert_eq!(record.last_accessed, later);
    }
}
