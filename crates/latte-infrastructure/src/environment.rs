//! In-memory environment implementation for host shells.

use std::sync::RwLock;

use latte_core::environment::Environment;
use latte_core::theme::ResolvedTheme;

/// [`Environment`] implementation backed by plain memory cells.
///
/// The host shell polls [`applied_theme`](Self::applied_theme) and
/// [`requested_route`](Self::requested_route) to mirror the core's requests
/// into its actual window; the platform color-scheme is supplied at
/// construction as a snapshot.
pub struct ShellEnvironment {
    system: ResolvedTheme,
    applied: RwLock<Option<ResolvedTheme>>,
    navigations: RwLock<Vec<String>>,
}

impl ShellEnvironment {
    pub fn new(system: ResolvedTheme) -> Self {
        Self {
            system,
            applied: RwLock::new(None),
            navigations: RwLock::new(Vec::new()),
        }
    }

    /// The theme most recently applied, if any.
    pub fn applied_theme(&self) -> Option<ResolvedTheme> {
        *self.applied.read().unwrap()
    }

    /// The most recently requested route, if any.
    pub fn requested_route(&self) -> Option<String> {
        self.navigations.read().unwrap().last().cloned()
    }

    /// Every navigation requested so far, in order.
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.read().unwrap().clone()
    }
}

impl Default for ShellEnvironment {
    fn default() -> Self {
        Self::new(ResolvedTheme::Light)
    }
}

impl Environment for ShellEnvironment {
    fn system_theme(&self) -> ResolvedTheme {
        self.system
    }

    fn apply_theme(&self, theme: ResolvedTheme) {
        tracing::debug!(?theme, "applying theme");
        *self.applied.write().unwrap() = Some(theme);
    }

    fn navigate_to(&self, route: &str) {
        tracing::info!(route, "navigation requested");
        self.navigations.write().unwrap().push(route.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_applied_theme_and_navigations() {
        let env = ShellEnvironment::new(ResolvedTheme::Dark);
        assert_eq!(env.system_theme(), ResolvedTheme::Dark);
        assert!(env.applied_theme().is_none());

        env.apply_theme(ResolvedTheme::Light);
        env.navigate_to("/login");

        assert_eq!(env.applied_theme(), Some(ResolvedTheme::Light));
        assert_eq!(env.requested_route(), Some("/login".to_string()));
        assert_eq!(env.navigations().len(), 1);
    }
}
