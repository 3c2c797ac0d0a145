//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `REFERRALCANDY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use referralcandy_connect::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod api;
mod error;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has working defaults, so an empty environment loads fine;
/// the env only overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Referral service API configuration (base URL, timeout)
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `REFERRALCANDY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `REFERRALCANDY__API__BASE_URL=...` -> `api.base_url = ...`
    /// - `REFERRALCANDY__API__TIMEOUT_SECS=30` -> `api.timeout_secs = 30`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("REFERRALCANDY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        Ok(())
    }
}
