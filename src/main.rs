// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava activity fetcher.
//!
//! Obtains a valid access token (authorizing in the browser on first run),
//! fetches a page of recent activities and prints them, reshaped, as JSON.

use strava_toolkit::{
    config::Config,
    error::AppError,
    logging::init_logging,
    services::{fetch_activities, Pipeline, TerminalPrompt, TokenManager},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    tracing::info!("--- Strava API Script ---");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let manager = TokenManager::new(&config);

    let access_token = match manager.get_access_token(&TerminalPrompt).await {
        Ok(token) => Some(token),
        Err(e @ AppError::AuthorizationParse(_)) => {
            tracing::warn!(error = %e, "Could not obtain access token. Exiting.");
            None
        }
        Err(e) => return Err(e.into()),
    };

    let Some(access_token) = access_token else {
        return Ok(());
    };

    let activities = fetch_activities(
        manager.client(),
        Some(&access_token),
        config.activities_page,
        config.activities_per_page,
    )
    .await;

    if let Some(activities) = activities {
        let cleaned = Pipeline::activities().run(&activities);
        println!("{}", serde_json::to_string_pretty(&cleaned)?);
    }

    Ok(())
}
