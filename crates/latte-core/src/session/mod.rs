//! Session state: the single source of truth for "who is logged in".

pub mod model;
pub mod store;

pub use model::{AuthStatus, Session, SessionSnapshot};
pub use store::SessionStore;
