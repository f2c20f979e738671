// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod credential;
pub mod weather;

pub use activity::Record;
pub use credential::Credential;
pub use weather::{DailyForecast, ForecastParams, ForecastPayload, WeatherForecast};
