//! In-memory implementation of the URL registry.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Process-lifetime registry backed by a `HashMap` keyed by full short URL.
///
/// A single `RwLock` guards the map and every trait operation runs as one
/// critical section, so each operation is atomic on its own. Nothing is
/// evicted and nothing is persisted; a restart clears all state.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    records: RwLock<HashMap<String, UrlRecord>>,
}

impl MemoryUrlRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn touch_by_long_url(
        &self,
        long_url: &str,
        accessed_at: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, AppError> {
        let mut records = self.records.write().await;

        Ok(records
            .values_mut()
            .find(|record| record.long_url == long_url)
            .map(|record| {
                record.touch(accessed_at);
                record.clone()
            }))
    }

    async fn touch_by_short_url(
        &self,
        short_url: &str,
        accessed_at: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, AppError> {
        let mut records = self.records.write().await;

        Ok(records.get_mut(short_url).map(|record| {
            record.touch(accessed_at);
            record.clone()
        }))
    }

    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, AppError> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.short_url) {
            return Err(AppError::internal(format!(
                "short url '{}' is already taken",
                record.short_url
            )));
        }

        records.insert(record.short_url.clone(), record.clone());
        Ok(record)
    }

    async fn short_codes(&self, prefix: &str) -> Result<HashSet<String>, AppError> {
        let records = self.records.read().await;

        Ok(records
            .keys()
            .map(|short_url| {
                short_url
                    .strip_prefix(prefix)
                    .unwrap_or(short_url)
                    .to_string()
            })
            .collect())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.records.read().await.len())
    }
}
