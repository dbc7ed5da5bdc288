//! Configuration management for the HubSpot notes MCP server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the .env
//! file through `dotenvy`, which never prints.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default base URL for the HubSpot API.
const DEFAULT_API_BASE_URL: &str = "https://api.hubapi.com";

/// Configuration for the HubSpot notes MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// HubSpot API base URL
    pub api_base_url: String,

    /// Private app access token for authentication
    pub access_token: String,

    /// Contact every created note is associated with
    pub contact_id: u64,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `HUBSPOT_ACCESS_TOKEN`: private app access token
    /// - `HUBSPOT_CONTACT_ID`: numeric contact id that owns created notes
    ///
    /// Optional environment variables:
    /// - `HUBSPOT_API_BASE_URL`: API base URL (default: `https://api.hubapi.com`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let access_token = env::var("HUBSPOT_ACCESS_TOKEN")
            .map_err(|_| ConfigError::MissingVar("HUBSPOT_ACCESS_TOKEN".to_string()))?;

        if access_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "HUBSPOT_ACCESS_TOKEN".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let contact_id_raw = env::var("HUBSPOT_CONTACT_ID")
            .map_err(|_| ConfigError::MissingVar("HUBSPOT_CONTACT_ID".to_string()))?;

        let contact_id = contact_id_raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "HUBSPOT_CONTACT_ID".to_string(),
                reason: format!("Must be a numeric contact id, got: {}", contact_id_raw),
            })?;

        let api_base_url = env::var("HUBSPOT_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "HUBSPOT_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_base_url,
            access_token,
            contact_id,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: String::new(),
            contact_id: 0,
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
