// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tomorrow.io daily forecast payload and the flattened shape returned by
//! the weather tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Arguments of the `get_forecast_weather_data` tool.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct ForecastParams {
    /// Location for analysis, e.g. "paris" or "42.3478,-71.0466"
    pub location: String,
}

/// Raw forecast response (`timesteps=1d`).
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub location: ForecastLocation,
    pub timelines: Timelines,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastLocation {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Timelines {
    #[serde(default)]
    pub daily: Vec<DailyTimeline>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyTimeline {
    pub time: Option<String>,
    #[serde(default)]
    pub values: DailyValues,
}

/// The subset of daily values the tool reports. Anything missing upstream
/// stays `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyValues {
    pub precipitation_probability_avg: Option<f64>,
    pub precipitation_probability_max: Option<f64>,
    pub precipitation_probability_min: Option<f64>,
    pub humidity_avg: Option<f64>,
    pub sunrise_time: Option<String>,
    pub sunset_time: Option<String>,
    pub temperature_apparent_avg: Option<f64>,
    pub temperature_apparent_max: Option<f64>,
    pub temperature_apparent_min: Option<f64>,
    pub temperature_avg: Option<f64>,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub wind_speed_avg: Option<f64>,
    pub wind_speed_max: Option<f64>,
}

/// Flattened forecast returned to tool callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub location: String,
    pub forecast: Vec<DailyForecast>,
}

/// One forecast day. Every field is always serialized; absent values are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: String,
    pub precipitation_probability_avg: Option<f64>,
    pub precipitation_probability_max: Option<f64>,
    pub precipitation_probability_min: Option<f64>,
    pub humidity_avg: Option<f64>,
    pub sunrise_time: Option<String>,
    pub sunset_time: Option<String>,
    pub temperature_apparent_avg: Option<f64>,
    pub temperature_apparent_max: Option<f64>,
    pub temperature_apparent_min: Option<f64>,
    pub temperature_avg: Option<f64>,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub wind_speed_avg: Option<f64>,
    pub wind_speed_max: Option<f64>,
}

impl From<DailyTimeline> for DailyForecast {
    fn from(day: DailyTimeline) -> Self {
        let v = day.values;
        Self {
            date: day.time.unwrap_or_default(),
            precipitation_probability_avg: v.precipitation_probability_avg,
            precipitation_probability_max: v.precipitation_probability_max,
            precipitation_probability_min: v.precipitation_probability_min,
            humidity_avg: v.humidity_avg,
            sunrise_time: v.sunrise_time,
            sunset_time: v.sunset_time,
            temperature_apparent_avg: v.temperature_apparent_avg,
            temperature_apparent_max: v.temperature_apparent_max,
            temperature_apparent_min: v.temperature_apparent_min,
            temperature_avg: v.temperature_avg,
            temperature_max: v.temperature_max,
            temperature_min: v.temperature_min,
            wind_speed_avg: v.wind_speed_avg,
            wind_speed_max: v.wind_speed_max,
        }
    }
}

impl From<ForecastPayload> for WeatherForecast {
    fn from(payload: ForecastPayload) -> Self {
        Self {
            location: payload
                .location
                .name
                .unwrap_or_else(|| "Unknown".to_string()),
            forecast: payload
                .timelines
                .daily
                .into_iter()
                .map(DailyForecast::from)
                .collect(),
        }
    }
}
