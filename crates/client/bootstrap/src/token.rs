//! File-backed auth token store.
//!
//! The one piece of local persistence the client carries: the bearer token
//! from the last sign-in. Stored as a single file in the platform data
//! directory, written via temp file + atomic rename so a crash never leaves
//! a torn token behind.

use std::fs;
use std::path::{Path, PathBuf};

/// Token store errors.
#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    #[error("No platform data directory available")]
    NoDataDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Single-value key store for the auth token.
pub struct AuthTokenStore {
    path: PathBuf,
}

impl AuthTokenStore {
    /// Open the store at the platform default location.
    pub fn open() -> Result<Self, TokenStoreError> {
        let dirs = directories::ProjectDirs::from("com", "idledevotion", "devotion")
            .ok_or(TokenStoreError::NoDataDir)?;
        Ok(Self::at(dirs.data_dir().join("auth_token")))
    }

    /// Open the store at an explicit path (tests, portable installs).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored token, if any. Empty files count as absent.
    pub fn load(&self) -> Result<Option<String>, TokenStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let token = raw.trim();
        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(token.to_string()))
        }
    }

    /// Persist a token, atomically replacing any previous one.
    pub fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, token)?;
        fs::rename(&temp_path, &self.path)?;
        tracing::debug!(path = %self.path.display(), "auth token saved");
        Ok(())
    }

    /// Remove the stored token (sign-out).
    pub fn clear(&self) -> Result<(), TokenStoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!(path = %self.path.display(), "auth token cleared");
        }
        Ok(())
    }
}
