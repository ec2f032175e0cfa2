//! Repository trait for the shared URL registry.

use std::collections::HashSet;

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Registry interface owning the mapping from short URL to [`UrlRecord`].
///
/// All registry mutation goes through this trait: encode inserts records,
/// and both encode and decode refresh `last_accessed` via the touch
/// operations. Each operation is a single atomic step against the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record whose long URL equals `long_url` (linear scan over all
    /// stored records) and refreshes its `last_accessed`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` with the refreshed record on a hit
    /// - `Ok(None)` when the URL was never encoded
    async fn touch_by_long_url(
        &self,
        long_url: &str,
        accessed_at: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Exact-key lookup by short URL; refreshes `last_accessed` on a hit.
    async fn touch_by_short_url(
        &self,
        short_url: &str,
        accessed_at: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Inserts a freshly encoded record keyed by its short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the short URL is already taken; code
    /// generation guarantees uniqueness, so this indicates a bug.
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, AppError>;

    /// Snapshot of the short codes currently in use.
    ///
    /// Each stored short URL is stripped of `prefix`; a record created under
    /// an older prefix contributes its full short URL instead, which is
    /// equally collision-safe.
    async fn short_codes(&self, prefix: &str) -> Result<HashSet<String>, AppError>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize, AppError>;
}
