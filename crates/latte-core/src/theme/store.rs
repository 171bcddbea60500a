//! Preference store trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::theme::model::Theme;

/// Tracks and applies the light/dark/system theme preference.
///
/// Only the theme itself is persisted; transient UI flags are
/// process-lifetime only. The theme is re-applied to the environment on
/// every mutation and on initialization, never lazily.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Persists the preference and immediately applies its resolution to
    /// the rendering environment.
    async fn set_theme(&self, theme: Theme) -> Result<()>;

    /// Flips dark<->light and stores the explicit result. A `System`
    /// preference is first resolved against the current platform snapshot,
    /// then flipped, so the outcome is deterministic.
    async fn toggle_theme(&self) -> Result<Theme>;

    /// Re-applies the persisted value to the environment without changing
    /// persisted state. Idempotent; intended to run once per process start.
    async fn initialize_theme(&self) -> Result<()>;

    /// Returns the current persisted preference.
    async fn theme(&self) -> Theme;
}
