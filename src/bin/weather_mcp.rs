// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MCP stdio server exposing `get_forecast_weather_data`.
//!
//! stdout carries JSON-RPC only; logs go to stderr.

use strava_toolkit::{
    config::WeatherConfig,
    logging::init_logging,
    mcp::serve,
    services::{WeatherClient, WeatherTool},
};
use tokio::io::BufReader;

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

    let tool = WeatherTool::new(WeatherClient::new(&config));
    tracing::info!(tool = WeatherTool::NAME, "Weather MCP server listening on stdio");

    serve(&tool, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}
