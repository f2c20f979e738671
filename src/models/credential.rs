// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth credential record persisted to the token file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Refresh this many seconds before the access token actually expires.
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// Token response from Strava, stored as-is.
///
/// Only the three fields the token manager reads are typed; everything else
/// the provider returns (`token_type`, `expires_in`, `athlete`, ...) is kept
/// in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) when the access token expires
    pub expires_at: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Credential {
    pub fn new(access_token: String, refresh_token: String, expires_at: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_at,
            extra: Map::new(),
        }
    }

    /// True once `now` is inside the refresh margin before expiry.
    pub fn needs_refresh(&self, now: i64) -> bool {
        now > self.expires_at - TOKEN_REFRESH_MARGIN_SECS
    }
}
