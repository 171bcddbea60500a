//! UI theme preference: model and store trait.

pub mod model;
pub mod store;

pub use model::{ResolvedTheme, Theme};
pub use store::PreferenceStore;
