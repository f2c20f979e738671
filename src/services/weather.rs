// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tomorrow.io forecast client and the `get_forecast_weather_data` tool.

use crate::config::WeatherConfig;
use crate::error::AppError;
use crate::models::{ForecastParams, ForecastPayload, WeatherForecast};
use serde_json::Value;

/// Tomorrow.io daily forecast client.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch the daily forecast for `location` and flatten it.
    pub async fn get_forecast(&self, location: &str) -> Result<WeatherForecast, AppError> {
        let response = self
            .http
            .get(&self.base_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("location", location),
                ("timesteps", "1d"),
                ("units", "metric"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ForecastPayload = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse forecast: {}", e)))?;

        Ok(WeatherForecast::from(payload))
    }
}

/// Forecast lookup exposed as a callable tool.
#[derive(Clone)]
pub struct WeatherTool {
    client: WeatherClient,
}

impl WeatherTool {
    pub const NAME: &'static str = "get_forecast_weather_data";

    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    pub fn description(&self) -> &'static str {
        "Fetches weather data for the next 5 days given a location. Ask the user \
         for a location before calling; the location should be stripped and lowercase."
    }

    /// JSON schema of the tool arguments, derived from `ForecastParams`.
    pub fn parameters(&self) -> Value {
        serde_json::to_value(schemars::schema_for!(ForecastParams)).unwrap_or(Value::Null)
    }

    /// Run the lookup, logging failures and degrading to `None`.
    pub async fn execute(&self, location: &str) -> Option<WeatherForecast> {
        match self.client.get_forecast(location).await {
            Ok(forecast) => {
                tracing::info!(
                    location = %forecast.location,
                    days = forecast.forecast.len(),
                    "Fetched weather forecast"
                );
                Some(forecast)
            }
            Err(e) => {
                tracing::error!(error = %e, location, "Error fetching weather data");
                None
            }
        }
    }

    /// Tool-call entry point: `{"location": "..."}` in, forecast JSON or `null` out.
    pub async fn call(&self, args: &Value) -> Value {
        let params = match serde_json::from_value::<ForecastParams>(args.clone()) {
            Ok(params) => params,
            Err(e) => {
                tracing::warn!(error = %e, "Weather tool called without a location");
                return Value::Null;
            }
        };

        self.execute(&params.location)
            .await
            .and_then(|forecast| serde_json::to_value(forecast).ok())
            .unwrap_or(Value::Null)
    }
}
