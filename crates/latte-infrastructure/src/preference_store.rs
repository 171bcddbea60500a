//! File-backed UI preference store implementation.
//!
//! Persists `{theme}` as the `ui-storage.json` blob. Transient UI flags are
//! process-lifetime only and deliberately never written here.

use std::io::ErrorKind;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use latte_core::environment::Environment;
use latte_core::error::Result;
use latte_core::theme::{PreferenceStore, Theme};

use crate::paths::LattePaths;

/// Durable form of the UI preference blob. Only the theme is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UiStorage {
    theme: Theme,
}

/// File-backed [`PreferenceStore`].
pub struct FilePreferenceStore {
    theme: Arc<Mutex<Theme>>,
    paths: LattePaths,
    environment: Arc<dyn Environment>,
}

impl FilePreferenceStore {
    /// Creates the store and hydrates the persisted preference.
    ///
    /// The theme is not applied here; run
    /// [`initialize_theme`](PreferenceStore::initialize_theme) once at
    /// process start.
    pub async fn load(paths: LattePaths, environment: Arc<dyn Environment>) -> Self {
        let theme = Self::hydrate(&paths).await;
        Self {
            theme: Arc::new(Mutex::new(theme)),
            paths,
            environment,
        }
    }

    async fn hydrate(paths: &LattePaths) -> Theme {
        match tokio::fs::read_to_string(paths.ui_storage_file()).await {
            Ok(content) => match serde_json::from_str::<UiStorage>(&content) {
                Ok(storage) => storage.theme,
                Err(err) => {
                    tracing::warn!("failed to parse ui-storage, using default theme: {err}");
                    Theme::default()
                }
            },
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    tracing::warn!("failed to read ui-storage: {err}");
                }
                Theme::default()
            }
        }
    }

    async fn persist(&self, theme: Theme) -> Result<()> {
        self.paths.ensure_config_dir().await?;
        let content = serde_json::to_string_pretty(&UiStorage { theme })?;
        tokio::fs::write(self.paths.ui_storage_file(), content).await?;
        Ok(())
    }

    /// Resolves `System` against the platform snapshot and applies.
    fn apply(&self, theme: Theme) {
        let resolved = theme.resolve(self.environment.system_theme());
        self.environment.apply_theme(resolved);
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn set_theme(&self, theme: Theme) -> Result<()> {
        let mut current = self.theme.lock().await;
        self.persist(theme).await?;
        *current = theme;
        self.apply(theme);
        tracing::debug!(?theme, "theme preference updated");
        Ok(())
    }

    async fn toggle_theme(&self) -> Result<Theme> {
        let mut current = self.theme.lock().await;
        // System resolves to its current computed value first, then flips.
        let resolved = current.resolve(self.environment.system_theme());
        let next = Theme::from(resolved.flipped());
        self.persist(next).await?;
        *current = next;
        self.apply(next);
        Ok(next)
    }

    async fn initialize_theme(&self) -> Result<()> {
        let current = self.theme.lock().await;
        self.apply(*current);
        Ok(())
    }

    async fn theme(&self) -> Theme {
        *self.theme.lock().await
    }
}
