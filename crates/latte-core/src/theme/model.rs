//! Theme domain model.

use serde::{Deserialize, Serialize};

/// Persisted theme preference. `System` defers to the platform's current
/// color-scheme signal at apply time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

/// A theme with `System` already resolved; what actually gets applied to
/// the rendering environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl Theme {
    /// Resolves this preference against a snapshot of the platform
    /// color-scheme. The snapshot is taken at call time; later platform
    /// changes are not auto-reflected.
    pub fn resolve(self, system: ResolvedTheme) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System => system,
        }
    }
}

impl ResolvedTheme {
    pub fn flipped(self) -> Self {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }
}

impl From<ResolvedTheme> for Theme {
    fn from(resolved: ResolvedTheme) -> Self {
        match resolved {
            ResolvedTheme::Light => Theme::Light,
            ResolvedTheme::Dark => Theme::Dark,
        }
    }
}
