// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API clients and record reshaping.

pub mod activity;
pub mod oauth;
pub mod reshape;
pub mod strava;
pub mod token_store;
pub mod weather;

pub use activity::fetch_activities;
pub use oauth::{AuthorizationPrompt, TerminalPrompt, TokenManager, TokenState};
pub use reshape::{Pipeline, SegmentVariant, Transform};
pub use strava::StravaClient;
pub use token_store::TokenStore;
pub use weather::{WeatherClient, WeatherTool};
