// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use crate::error::{AppError, Result};
use chrono::{DateTime, Local, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a unix timestamp (seconds) as RFC3339, or the raw number if out of range.
pub fn format_unix_rfc3339(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(format_utc_rfc3339)
        .unwrap_or_else(|| timestamp.to_string())
}

/// Format a duration in seconds as `"H:M"`.
///
/// Minutes are not zero-padded: 3661 seconds is `"1:1"`.
pub fn format_clock(seconds: i64) -> String {
    let hours = seconds.div_euclid(3600);
    let minutes = seconds.rem_euclid(3600).div_euclid(60);
    format!("{}:{}", hours, minutes)
}

/// Parse a `YYYY-MM-DD` date into the epoch timestamp of local midnight.
pub fn date_string_to_timestamp(date: &str) -> Result<i64> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| AppError::InvalidInput(format!("{:?} is not YYYY-MM-DD: {}", date, e)))?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::InvalidInput(format!("No midnight for {}", date)))?;

    // DST gaps can skip midnight; take the earliest instant that exists.
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| AppError::InvalidInput(format!("{} has no local midnight", date)))
}
