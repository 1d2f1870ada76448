// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.
//!
//! The only thing that selects a backend is the base URL; everything else
//! is tuning with sensible defaults.

use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SAVE_CLOSE_DELAY_MS: u64 = 1500;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the OctoFit API, without a trailing slash
    pub api_base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// How long a successful save stays on screen before the form closes
    pub save_close_delay: Duration,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            save_close_delay: Duration::from_millis(DEFAULT_SAVE_CLOSE_DELAY_MS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = match env::var("OCTOFIT_API_URL") {
            Ok(url) => normalize_base_url(&url)?,
            Err(_) => DEFAULT_API_URL.to_string(),
        };

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(parse_u64(
                "OCTOFIT_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            save_close_delay: Duration::from_millis(parse_u64(
                "OCTOFIT_SAVE_CLOSE_DELAY_MS",
                DEFAULT_SAVE_CLOSE_DELAY_MS,
            )?),
        })
    }

    /// Replace the base URL (e.g. from a command-line flag).
    pub fn with_api_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_base_url(url)?;
        Ok(self)
    }
}

/// Trim whitespace and trailing slashes, and require an http(s) scheme.
pub fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(url.to_string()));
    }
    Ok(trimmed.to_string())
}

fn parse_u64(name: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Base URL must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url(" http://localhost:8000/ ").unwrap(),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_base_url("https://api.example.com//").unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_missing_scheme() {
        let err = normalize_base_url("localhost:8000").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_with_api_base_url_overrides() {
        let config = Config::default()
            .with_api_base_url("http://127.0.0.1:9000/")
            .expect("valid url");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.save_close_delay, Duration::from_millis(1500));
    }
}
