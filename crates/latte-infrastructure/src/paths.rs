//! Unified path management for latte durable state.
//!
//! All persisted blobs live under one config directory so every store
//! resolves files the same way on every platform.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/latte/             # Config directory (XDG on Linux)
//! ├── token.json               # Credential token entry (7-day expiry)
//! ├── auth-storage.json        # Persisted session {user, token, isAuthenticated}
//! └── ui-storage.json          # Persisted UI preferences {theme}
//! ```

use std::path::{Path, PathBuf};

use latte_core::error::{LatteError, Result};

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for LatteError {
    fn from(err: PathError) -> Self {
        LatteError::config(err.to_string())
    }
}

/// Unified path management for latte.
#[derive(Debug, Clone)]
pub struct LattePaths {
    base: PathBuf,
}

impl LattePaths {
    /// Creates a paths value rooted at `base`, or at the platform config
    /// directory (`~/.config/latte/` on Linux) when `base` is `None`.
    ///
    /// Tests pass an explicit base (a temp dir) to stay off the real
    /// user profile.
    pub fn new(base: Option<&Path>) -> std::result::Result<Self, PathError> {
        match base {
            Some(path) => Ok(Self {
                base: path.to_path_buf(),
            }),
            None => dirs::config_dir()
                .map(|dir| Self {
                    base: dir.join("latte"),
                })
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Returns the latte configuration directory.
    pub fn config_dir(&self) -> &Path {
        &self.base
    }

    /// Path to the credential token entry.
    pub fn token_file(&self) -> PathBuf {
        self.base.join("token.json")
    }

    /// Path to the persisted session blob.
    pub fn auth_storage_file(&self) -> PathBuf {
        self.base.join("auth-storage.json")
    }

    /// Path to the persisted UI preference blob.
    pub fn ui_storage_file(&self) -> PathBuf {
        self.base.join("ui-storage.json")
    }

    /// Ensures the config directory exists.
    pub async fn ensure_config_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.base).await?;
        Ok(())
    }
}
