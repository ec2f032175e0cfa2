//! Encode, decode, and prefix-update orchestration.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::prefix_normalizer::normalize_prefix;
use crate::utils::url_validator::is_valid_url;

/// Maximum accepted length of a prefix-update input, measured before
/// normalization.
pub const MAX_PREFIX_LEN: usize = 20;

/// Result of a domain-prefix update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixChange {
    pub old_prefix: String,
    pub new_prefix: String,
}

/// Service implementing the registry operations.
///
/// All registry mutation goes through the repository; the service itself
/// owns only the process-wide domain prefix, kept behind an `RwLock` so
/// concurrent requests read and replace it through one guard. Validation
/// always precedes mutation, so every operation either fully succeeds or
/// fails without side effects.
pub struct ShortenerService<R: UrlRepository> {
    repository: Arc<R>,
    prefix: RwLock<String>,
    code_length: usize,
}

impl<R: UrlRepository> ShortenerService<R> {
    /// Creates the service. The initial prefix is normalized the same way a
    /// prefix update would be, so configured and updated prefixes behave
    /// identically.
    pub fn new(repository: Arc<R>, initial_prefix: String, code_length: usize) -> Self {
        Self {
            repository,
            prefix: RwLock::new(normalize_prefix(&initial_prefix)),
            code_length,
        }
    }

    /// Encodes `long_url`, returning the stored record.
    ///
    /// Re-encoding an already stored URL returns the existing record with a
    /// refreshed `last_accessed`; its short URL and `created_at` never
    /// change, even across prefix updates. A new URL gets a freshly
    /// generated code under the current prefix.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] when `long_url` fails validation.
    pub async fn encode(&self, long_url: &str) -> Result<UrlRecord, AppError> {
        if !is_valid_url(long_url) {
            return Err(AppError::invalid_url("url", long_url));
        }

        let now = Utc::now();
        let trimmed = long_url.trim_end();

        if let Some(existing) = self.repository.touch_by_long_url(trimmed, now).await? {
            return Ok(existing);
        }

        let prefix = self.prefix.read().await.clone();
        let existing_codes = self.repository.short_codes(&prefix).await?;
        let code = generate_code(&existing_codes, self.code_length)?;

        let record = UrlRecord::new(trimmed.to_string(), format!("{prefix}{code}"), now);
        self.repository.insert(record).await
    }

    /// Resolves `short_url` back to its stored record, refreshing
    /// `last_accessed`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] when `short_url` fails validation and
    /// [`AppError::ShortUrlNotFound`] when nothing is stored under that key.
    pub async fn decode(&self, short_url: &str) -> Result<UrlRecord, AppError> {
        if !is_valid_url(short_url) {
            return Err(AppError::invalid_url("shorturl", short_url));
        }

        self.repository
            .touch_by_short_url(short_url, Utc::now())
            .await?
            .ok_or_else(|| AppError::short_url_not_found(short_url))
    }

    /// Replaces the domain prefix used for future encodings.
    ///
    /// The input is normalized: a trailing `/` is appended when absent and
    /// the scheme is forced to `https`. Stored records keep the prefix they
    /// were encoded under.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] for inputs that fail validation and
    /// [`AppError::DomainPrefixTooLong`] when the pre-normalization input
    /// exceeds [`MAX_PREFIX_LEN`] characters.
    pub async fn update_prefix(&self, new_prefix: &str) -> Result<PrefixChange, AppError> {
        if !is_valid_url(new_prefix) {
            return Err(AppError::invalid_url("domain prefix", new_prefix));
        }

        if new_prefix.len() > MAX_PREFIX_LEN {
            return Err(AppError::prefix_too_long(new_prefix));
        }

        let normalized = normalize_prefix(new_prefix);

        let mut prefix = self.prefix.write().await;
        let old_prefix = std::mem::replace(&mut *prefix, normalized.clone());

        Ok(PrefixChange {
            old_prefix,
            new_prefix: normalized,
        })
    }

    /// Currently configured domain prefix.
    pub async fn domain_prefix(&self) -> String {
        self.prefix.read().await.clone()
    }

    /// Number of records currently stored in the registry.
    pub async fn record_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
