// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth2 token lifecycle for a single local Strava user.
//!
//! The token manager moves between three states:
//! - `NoCredentials`: authorize in the browser, then exchange the code
//! - `Expired`: refresh with the stored refresh token
//! - `Valid`: use the stored access token as-is
//!
//! Every new or refreshed record is written to the token file before its
//! access token is handed out.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::Credential;
use crate::services::strava::StravaClient;
use crate::services::token_store::TokenStore;
use crate::time_utils::format_unix_rfc3339;
use chrono::Utc;
use std::io::{self, BufRead, Write};

/// Where the stored credential stands relative to `now`.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenState {
    NoCredentials,
    Valid(Credential),
    Expired(Credential),
}

impl TokenState {
    pub fn classify(stored: Option<Credential>, now: i64) -> Self {
        match stored {
            None => TokenState::NoCredentials,
            Some(credential) if credential.needs_refresh(now) => TokenState::Expired(credential),
            Some(credential) => TokenState::Valid(credential),
        }
    }
}

/// Build the Strava consent URL the user opens in a browser.
pub fn authorization_url(
    oauth_base_url: &str,
    client_id: &str,
    redirect_uri: &str,
    scope: &str,
) -> String {
    format!(
        "{}/authorize?\
         client_id={}&\
         response_type=code&\
         redirect_uri={}&\
         approval_prompt=force&\
         scope={}",
        oauth_base_url.trim_end_matches('/'),
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode(scope)
    )
}

/// Extract the `code` query parameter from the redirect URL the user pasted.
pub fn parse_authorization_code(redirect_url: &str) -> Result<String> {
    let url = url::Url::parse(redirect_url.trim())
        .map_err(|e| AppError::AuthorizationParse(format!("{} ({})", redirect_url.trim(), e)))?;

    url.query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::AuthorizationParse(redirect_url.trim().to_string()))
}

/// Source of the redirect URL after the user grants access.
///
/// Implementations show `authorization_url` to the user and return whatever
/// URL the provider redirected them to.
pub trait AuthorizationPrompt {
    fn redirect_url(&self, authorization_url: &str) -> Result<String>;
}

/// Interactive prompt: opens the browser and reads the pasted URL from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl AuthorizationPrompt for TerminalPrompt {
    fn redirect_url(&self, authorization_url: &str) -> Result<String> {
        tracing::info!("1. A browser window will open for you to authorize this script.");
        tracing::info!(
            "2. After authorizing, Strava will redirect you to a URL that looks like \
             'http://localhost/exchange_token?state=&code=...&scope=...'"
        );
        tracing::info!("3. Copy that entire URL from the address bar and paste it here.");

        if let Err(e) = open::that(authorization_url) {
            tracing::warn!(error = %e, url = %authorization_url, "Failed to open browser, visit the URL manually");
        }

        // stdout carries the program's JSON output, so the prompt goes to stderr.
        read_pasted_url(io::stdin().lock(), io::stderr())
    }
}

pub(crate) const PASTE_PROMPT: &str = "\nPaste the full redirect URL here: ";

/// Write the paste prompt to `output` and read one line from `input`.
pub(crate) fn read_pasted_url<R, W>(mut input: R, mut output: W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    output
        .write_all(PASTE_PROMPT.as_bytes())
        .and_then(|_| output.flush())
        .map_err(|e| AppError::Internal(e.into()))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(line)
}

/// Produces a currently-valid Strava access token.
#[derive(Clone)]
pub struct TokenManager {
    client: StravaClient,
    store: TokenStore,
    oauth_base_url: String,
    client_id: String,
    redirect_uri: String,
    scope: String,
}

impl TokenManager {
    pub fn new(config: &Config) -> Self {
        Self {
            client: StravaClient::new(config),
            store: TokenStore::new(config.token_file.clone()),
            oauth_base_url: config.oauth_base_url.clone(),
            client_id: config.strava_client_id.clone(),
            redirect_uri: config.redirect_uri.clone(),
            scope: config.scope.clone(),
        }
    }

    pub fn client(&self) -> &StravaClient {
        &self.client
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Consent URL for this application.
    pub fn authorization_url(&self) -> String {
        authorization_url(
            &self.oauth_base_url,
            &self.client_id,
            &self.redirect_uri,
            &self.scope,
        )
    }

    /// Return a valid access token, refreshing or authorizing as needed.
    ///
    /// HTTP failures from the token endpoint are returned as-is and nothing
    /// is persisted. A pasted URL without a code aborts with
    /// `AppError::AuthorizationParse`.
    pub async fn get_access_token<P>(&self, prompt: &P) -> Result<String>
    where
        P: AuthorizationPrompt + ?Sized,
    {
        let now = Utc::now().timestamp();

        match TokenState::classify(self.store.load()?, now) {
            TokenState::Valid(credential) => {
                tracing::info!(
                    expires_at = %format_unix_rfc3339(credential.expires_at),
                    "Access token is valid"
                );
                Ok(credential.access_token)
            }
            TokenState::Expired(credential) => {
                let refreshed = self.refresh(&credential).await?;
                Ok(refreshed.access_token)
            }
            TokenState::NoCredentials => {
                tracing::info!("No tokens found, starting initial authentication");
                let credential = self.authorize(prompt).await?;
                Ok(credential.access_token)
            }
        }
    }

    /// Refresh `credential` and persist the replacement.
    pub async fn refresh(&self, credential: &Credential) -> Result<Credential> {
        tracing::info!("Access token expired, refreshing");

        let refreshed = self
            .client
            .refresh_token(&credential.refresh_token)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Token refresh failed"))?;

        self.store.save(&refreshed)?;
        tracing::info!(
            expires_at = %format_unix_rfc3339(refreshed.expires_at),
            "Token refreshed"
        );
        Ok(refreshed)
    }

    /// Run the interactive consent flow and persist the exchanged record.
    pub async fn authorize<P>(&self, prompt: &P) -> Result<Credential>
    where
        P: AuthorizationPrompt + ?Sized,
    {
        let auth_url = self.authorization_url();
        let pasted = prompt.redirect_url(&auth_url)?;

        let code = parse_authorization_code(&pasted)
            .inspect_err(|e| tracing::error!(error = %e, "Could not extract authorization code"))?;
        tracing::info!("Extracted authorization code");

        tracing::info!("Exchanging authorization code for access token");
        let credential = self
            .client
            .exchange_code(&code)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Strava token exchange failed"))?;

        self.store.save(&credential)?;
        Ok(credential)
    }
}
