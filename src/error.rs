// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type shared by the Strava and weather clients.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The pasted redirect URL did not carry an authorization code.
    #[error("Could not find 'code' in the provided URL: {0}")]
    AuthorizationParse(String),

    /// Upstream answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected upstream response: {0}")]
    Upstream(String),

    #[error("Token store error: {0}")]
    TokenStore(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status of an upstream failure, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when Strava rejected the credentials (revoked or invalid token).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, AppError>;
