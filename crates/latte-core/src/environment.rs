//! The rendering/navigation environment seam.

use crate::theme::model::ResolvedTheme;

/// Host-shell surface the stores and the API client act on.
///
/// Keeping this behind a trait means the session and preference stores can
/// be exercised in isolation; the shell binds its real window/document
/// equivalents at startup.
pub trait Environment: Send + Sync {
    /// Snapshot of the platform's current color-scheme signal.
    fn system_theme(&self) -> ResolvedTheme;

    /// Applies a resolved theme to the rendering environment.
    fn apply_theme(&self, theme: ResolvedTheme);

    /// Requests navigation to a route (used by the forced-logout policy).
    fn navigate_to(&self, route: &str);
}
