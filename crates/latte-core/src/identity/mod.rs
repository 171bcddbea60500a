//! Identity domain model.

pub mod model;

pub use model::Identity;
