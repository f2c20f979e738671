// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weather forecast tool.
//!
//! Usage: `weather-forecast <location...>`. Prints the flattened five-day
//! forecast as JSON, or `null` if the lookup failed.

use strava_toolkit::{
    config::WeatherConfig,
    logging::init_logging,
    services::{WeatherClient, WeatherTool},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = match WeatherConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // The tool expects a stripped, lowercase location.
    let location = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_lowercase();
    if location.is_empty() {
        anyhow::bail!("usage: weather-forecast <location>");
    }

    let tool = WeatherTool::new(WeatherClient::new(&config));
    tracing::info!(tool = WeatherTool::NAME, location = %location, "Calling tool");

    let result = tool
        .call(&serde_json::json!({ "location": location }))
        .await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
