// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::path::PathBuf;
use std::sync::Mutex;
use strava_toolkit::config::{Config, WeatherConfig};
use strava_toolkit::error::Result;
use strava_toolkit::services::AuthorizationPrompt;
use wiremock::MockServer;

/// Config pointing Strava endpoints at the mock server and the token file
/// into `dir`.
#[allow(dead_code)]
pub fn test_config(server: &MockServer, dir: &tempfile::TempDir) -> Config {
    Config {
        token_file: token_path(dir),
        oauth_base_url: format!("{}/oauth", server.uri()),
        api_base_url: format!("{}/api/v3", server.uri()),
        ..Config::default()
    }
}

#[allow(dead_code)]
pub fn token_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("credentials").join("strava_tokens.json")
}

#[allow(dead_code)]
pub fn test_weather_config(server: &MockServer) -> WeatherConfig {
    WeatherConfig {
        base_url: format!("{}/v4/weather/forecast", server.uri()),
        ..WeatherConfig::default()
    }
}

/// Strava token response as returned by `POST /oauth/token`.
#[allow(dead_code)]
pub fn token_response(access: &str, refresh: &str, expires_at: i64) -> serde_json::Value {
    serde_json::json!({
        "token_type": "Bearer",
        "access_token": access,
        "expires_at": expires_at,
        "expires_in": 21600,
        "refresh_token": refresh
    })
}

/// Prompt that answers with a canned redirect URL and records what it was shown.
#[allow(dead_code)]
pub struct ScriptedPrompt {
    response: String,
    pub shown: Mutex<Option<String>>,
}

#[allow(dead_code)]
impl ScriptedPrompt {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            shown: Mutex::new(None),
        }
    }

    pub fn shown_url(&self) -> Option<String> {
        self.shown.lock().unwrap().clone()
    }
}

impl AuthorizationPrompt for ScriptedPrompt {
    fn redirect_url(&self, authorization_url: &str) -> Result<String> {
        *self.shown.lock().unwrap() = Some(authorization_url.to_string());
        Ok(self.response.clone())
    }
}
