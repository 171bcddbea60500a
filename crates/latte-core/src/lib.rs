//! Domain models and store contracts for the Latte client core.
//!
//! This crate defines the pieces every other layer shares: the `Identity`
//! and `Listing` domain models, the session and theme store traits, the
//! `Environment` seam the host shell implements, and the normalized error
//! type produced by the API layer.

pub mod config;
pub mod environment;
pub mod error;
pub mod identity;
pub mod listing;
pub mod session;
pub mod theme;

// Re-export common error type
pub use error::{LatteError, Result};
