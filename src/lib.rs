// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava toolkit: OAuth token management, activity fetching and weather
//! forecasts, with helpers that reshape API responses into flat records.

pub mod config;
pub mod error;
pub mod logging;
pub mod mcp;
pub mod models;
pub mod services;
pub mod time_utils;
