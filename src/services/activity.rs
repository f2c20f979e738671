// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity fetching with a human-readable summary trace.

use crate::models::activity::summary_line;
use crate::models::Record;
use crate::services::strava::StravaClient;

/// Fetch one page of the athlete's activities.
///
/// Returns `None` without touching the network if there is no token, and
/// `None` after logging status and body if Strava answers with an error.
pub async fn fetch_activities(
    client: &StravaClient,
    access_token: Option<&str>,
    page: u32,
    per_page: u32,
) -> Option<Vec<Record>> {
    let Some(access_token) = access_token.filter(|t| !t.is_empty()) else {
        tracing::warn!("Cannot fetch activities without a valid access token");
        return None;
    };

    tracing::info!(page, per_page, "Fetching recent activities from Strava");

    match client.list_activities(access_token, page, per_page).await {
        Ok(activities) => {
            log_summary(&activities);
            Some(activities)
        }
        Err(e) => {
            tracing::error!(
                status = ?e.status(),
                error = %e,
                "Failed to fetch activities"
            );
            None
        }
    }
}

fn log_summary(activities: &[Record]) {
    if activities.is_empty() {
        tracing::info!("No activities found.");
        return;
    }

    tracing::info!(count = activities.len(), "--- Recent Activities ---");
    for activity in activities {
        tracing::info!("{}", summary_line(activity));
    }
}
