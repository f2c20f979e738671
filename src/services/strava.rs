// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client.
//!
//! Handles:
//! - Authorization code exchange and token refresh
//! - Paginated activity listing

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Credential, Record};
use serde::Deserialize;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    oauth_base_url: String,
    api_base_url: String,
    client_id: String,
    client_secret: String,
}

impl StravaClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            oauth_base_url: config.oauth_base_url.trim_end_matches('/').to_string(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client_id: config.strava_client_id.clone(),
            client_secret: config.strava_client_secret.clone(),
        }
    }

    /// List the authenticated athlete's activities (paginated).
    pub async fn list_activities(
        &self,
        access_token: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Record>, AppError> {
        let url = format!("{}/athlete/activities", self.api_base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Exchange an authorization code for a credential record.
    pub async fn exchange_code(&self, code: &str) -> Result<Credential, AppError> {
        self.token_request(&[("code", code), ("grant_type", "authorization_code")])
            .await
    }

    /// Refresh an expired access token.
    ///
    /// Strava may or may not rotate the refresh token; callers must keep the
    /// returned record and drop the old one.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<Credential, AppError> {
        self.token_request(&[
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ])
        .await
    }

    /// POST to the token endpoint with client credentials plus `grant`.
    async fn token_request(&self, grant: &[(&str, &str)]) -> Result<Credential, AppError> {
        let mut form = vec![
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        form.extend_from_slice(grant);

        let response = self
            .http
            .post(format!("{}/token", self.oauth_base_url))
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Token request failed: {}", e)))?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Strava rate limit hit (429)");
            }

            return Err(AppError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("JSON parse error: {}", e)))
    }
}
