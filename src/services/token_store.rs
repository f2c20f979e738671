// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed storage for the Strava credential record.

use crate::error::{AppError, Result};
use crate::models::Credential;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persists one credential record as a JSON file.
///
/// The file is plain JSON with default permissions. There is no locking:
/// concurrent writers race and the last one wins.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored record. A missing file is `Ok(None)`, not an error.
    pub fn load(&self) -> Result<Option<Credential>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::TokenStore(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let credential = serde_json::from_str(&json).map_err(|e| {
            AppError::TokenStore(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;
        Ok(Some(credential))
    }

    /// Overwrite the file with `credential`.
    pub fn save(&self, credential: &Credential) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::TokenStore(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let json = serde_json::to_string(credential)
            .map_err(|e| AppError::TokenStore(format!("Failed to serialize tokens: {}", e)))?;
        fs::write(&self.path, json).map_err(|e| {
            AppError::TokenStore(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        tracing::info!(path = %self.path.display(), "Tokens saved");
        Ok(())
    }
}
