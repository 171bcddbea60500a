//! Client configuration read from the environment at startup.

use std::env;

/// Base API URL used when `LATTE_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Startup configuration for the API client and federated auth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the marketplace backend.
    pub api_url: String,
    /// OAuth client identifier for federated (Google) sign-in. Empty when
    /// federated auth is not configured.
    pub google_client_id: String,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            google_client_id: String::new(),
        }
    }

    /// Reads configuration from environment variables.
    ///
    /// `LATTE_API_URL` falls back to [`DEFAULT_API_URL`];
    /// `LATTE_GOOGLE_CLIENT_ID` falls back to an empty string.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("LATTE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            google_client_id: env::var("LATTE_GOOGLE_CLIENT_ID").unwrap_or_default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
