//! HTTP gateway for the Latte marketplace backend.
//!
//! [`client::ApiClient`] is the sole network egress point: it attaches the
//! bearer token from the session store to every request, normalizes every
//! failure into a single-message error, and reacts to a 401 by clearing the
//! session and requesting navigation to the public landing route. The
//! [`auth::AuthService`] and [`listing::ListingService`] domain services are
//! thin request/response mappers on top of it.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod listing;

pub use auth::AuthService;
pub use client::ApiClient;
pub use listing::ListingService;
