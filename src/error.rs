//! Application error types and HTTP response mapping.
//!
//! Every error carries the full client-visible message. The wording is stable
//! and clients match on the literal text, so messages are built here in one
//! place rather than at the call sites.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Errors surfaced by the shortening service.
///
/// No variant is retried internally; each one is returned to the caller with
/// its descriptive message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input failed URL-shape validation.
    #[error("{0}")]
    InvalidUrl(String),

    /// Domain-prefix update input exceeds the maximum length.
    #[error("{0}")]
    DomainPrefixTooLong(String),

    /// Decode lookup missed.
    #[error("{0}")]
    ShortUrlNotFound(String),

    /// An operation was called with an out-of-range argument.
    #[error("{0}")]
    InvalidArgument(String),

    /// Unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Invalid-URL rejection. `field` names the offending input in the
    /// message: `url` for encode, `shorturl` for decode, `domain prefix` for
    /// prefix updates.
    pub fn invalid_url(field: &str, value: &str) -> Self {
        Self::InvalidUrl(format!(
            "the provided {field} '{value}' is not a valid URL. please conform to a valid URL format with preceeding http or https schemas, see https://www.w3.org/Addressing/URL/url-spec.txt"
        ))
    }

    /// Decode miss for a short URL that was never encoded.
    pub fn short_url_not_found(value: &str) -> Self {
        Self::ShortUrlNotFound(format!(
            "the requested shorturl '{value}' cannot be found and is not encoded yet. please first encode to decode."
        ))
    }

    /// Prefix-update input longer than the allowed maximum.
    pub fn prefix_too_long(value: &str) -> Self {
        Self::DomainPrefixTooLong(format!(
            "the provided domain prefix '{value}' seems to be longer than the maximum of 20 characters."
        ))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidUrl(_)
            | AppError::DomainPrefixTooLong(_)
            | AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::ShortUrlNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
