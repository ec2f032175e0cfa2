//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `DOMAIN_PREFIX` - Prefix for newly encoded short URLs
//!   (default: `https://shor.ty/`; must be a valid URL of at most 20
//!   characters)
//! - `CODE_LENGTH` - Length of generated short codes (default: 6)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

use crate::application::services::MAX_PREFIX_LEN;
use crate::utils::url_validator::is_valid_url;

/// Shortest accepted generated code.
const MIN_CODE_LENGTH: usize = 1;

/// Longest accepted generated code. Far above anything useful; the cap only
/// guards against misconfiguration producing absurd short URLs.
const MAX_CODE_LENGTH: usize = 32;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub domain_prefix: String,
    pub code_length: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for everything that is unset.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let domain_prefix =
            env::var("DOMAIN_PREFIX").unwrap_or_else(|_| "https://shor.ty/".to_string());

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(6);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            domain_prefix,
            code_length,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `domain_prefix` is not a valid URL or exceeds the prefix length limit
    /// - `code_length` is out of range
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !is_valid_url(&self.domain_prefix) {
            anyhow::bail!(
                "DOMAIN_PREFIX must be a valid URL with scheme and host, got '{}'",
                self.domain_prefix
            );
        }

        if self.domain_prefix.len() > MAX_PREFIX_LEN {
            anyhow::bail!(
                "DOMAIN_PREFIX must be at most {} characters, got {}",
                MAX_PREFIX_LEN,
                self.domain_prefix.len()
            );
        }

        if self.code_length < MIN_CODE_LENGTH || self.code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "CODE_LENGTH must be between {} and {}, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Domain prefix: {}", self.domain_prefix);
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            domain_prefix: "https://shor.ty/".to_string(),
            code_length: 6,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        // Invalid domain prefix
        config.domain_prefix = "not a url".to_string();
        assert!(config.validate().is_err());

        // Overlong domain prefix
        config.domain_prefix = "https://visit-mysites.com".to_string();
        assert!(config.validate().is_err());
        config.domain_prefix = "https://shor.ty/".to_string();

        // Invalid code length
        config.code_length = 0;
        assert!(config.validate().is_err());
        config.code_length = 64;
        assert!(config.validate().is_err());
        config.code_length = 6;

        // Invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("DOMAIN_PREFIX");
            env::remove_var("CODE_LENGTH");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.domain_prefix, "https://shor.ty/");
        assert_eq!(config.code_length, 6);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("DOMAIN_PREFIX", "https://brief.ly/");
            env::set_var("CODE_LENGTH", "8");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.domain_prefix, "https://brief.ly/");
        assert_eq!(config.code_length, 8);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("DOMAIN_PREFIX");
            env::remove_var("CODE_LENGTH");
        }
    }

    #[test]
    #[serial]
    fn test_unparseable_code_length_falls_back_to_default() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("CODE_LENGTH", "not-a-number");
        }

        let config = Config::from_env();
        assert_eq!(config.code_length, 6);

        // Cleanup
        unsafe {
            env::remove_var("CODE_LENGTH");
        }
    }
}
