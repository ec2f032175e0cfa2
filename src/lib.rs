//! # Shorty
//!
//! An in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry storage
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Encode a long URL into a short alias under a configurable domain prefix
//! - Decode a short URL back to its original, with access-time tracking
//! - Change the domain prefix at runtime without rewriting stored records
//! - Random 62-symbol short codes with collision avoidance
//!
//! The registry lives in process memory for the lifetime of the service:
//! nothing is evicted and nothing survives a restart.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides
//! export DOMAIN_PREFIX="https://shor.ty/"
//! export LISTEN="0.0.0.0:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PrefixChange, ShortenerService};
    pub use crate::domain::entities::UrlRecord;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryUrlRepository;
    pub use crate::state::AppState;
}
