// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Configuration loaded from environment variables (and `.env` if present).
//!
//! Credentials are read once at startup into explicit structs that are passed
//! by reference to the clients that need them.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_TOKEN_FILE: &str = "credentials/strava_tokens.json";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost/exchange_token";
pub const DEFAULT_SCOPE: &str = "read,activity:read_all";
pub const DEFAULT_OAUTH_URL: &str = "https://www.strava.com/oauth";
pub const DEFAULT_API_URL: &str = "https://www.strava.com/api/v3";
pub const DEFAULT_WEATHER_URL: &str = "https://api.tomorrow.io/v4/weather/forecast";

/// Placeholder values shipped in sample `.env` files.
const PLACEHOLDERS: &[&str] = &["YOUR_CLIENT_ID", "YOUR_CLIENT_SECRET", "YOUR_API_KEY"];

/// Strava configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava OAuth client ID (public)
    pub strava_client_id: String,
    /// Strava OAuth client secret
    pub strava_client_secret: String,
    /// Where the credential record is persisted
    pub token_file: PathBuf,
    /// Redirect target registered with the Strava application
    pub redirect_uri: String,
    /// Requested OAuth scope (comma-separated)
    pub scope: String,
    /// Base URL of the OAuth endpoints (`/authorize`, `/token`)
    pub oauth_base_url: String,
    /// Base URL of the REST API
    pub api_base_url: String,
    pub activities_page: u32,
    pub activities_per_page: u32,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_client_id: "test_client_id".to_string(),
            strava_client_secret: "test_secret".to_string(),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            oauth_base_url: DEFAULT_OAUTH_URL.to_string(),
            api_base_url: DEFAULT_API_URL.to_string(),
            activities_page: 1,
            activities_per_page: 20,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails if the Strava client credentials are missing or still set to
    /// the sample placeholders.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            strava_client_id: required("STRAVA_CLIENT_ID")?,
            strava_client_secret: required("STRAVA_CLIENT_SECRET")?,
            token_file: env::var("STRAVA_TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_FILE)),
            redirect_uri: env::var("STRAVA_REDIRECT_URI")
                .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string()),
            scope: env::var("STRAVA_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string()),
            oauth_base_url: env::var("STRAVA_OAUTH_URL")
                .unwrap_or_else(|_| DEFAULT_OAUTH_URL.to_string()),
            api_base_url: env::var("STRAVA_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            activities_page: env::var("STRAVA_ACTIVITIES_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            activities_per_page: env::var("STRAVA_ACTIVITIES_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
        })
    }
}

/// Tomorrow.io configuration for the weather tool.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Default for WeatherConfig {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_key: "test_api_key".to_string(),
            base_url: DEFAULT_WEATHER_URL.to_string(),
        }
    }
}

impl WeatherConfig {
    /// Load the weather API key and endpoint from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: required("TOMORROW_API_KEY")?,
            base_url: env::var("TOMORROW_API_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_URL.to_string()),
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    let value = env::var(name).map_err(|_| ConfigError::Missing(name))?;
    validate_secret(name, value.trim())
}

/// Reject empty values and sample placeholders.
pub fn validate_secret(name: &'static str, value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Missing(name));
    }
    if PLACEHOLDERS.contains(&value) {
        return Err(ConfigError::Placeholder(name));
    }
    Ok(value.to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Environment variable {0} is still set to a placeholder value")]
    Placeholder(&'static str),
}
