//! The authenticated API client.
//!
//! Every request goes through [`ApiClient`]: the outbound policy attaches
//! `Authorization: Bearer <token>` when a session token exists at call time
//! (single attempt, no retry or queuing); the inbound policy normalizes
//! every failure into one human-readable message and turns a 401 into a
//! forced logout plus a redirect request, while still rejecting the call so
//! the caller's error path runs.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use latte_core::config::ClientConfig;
use latte_core::environment::Environment;
use latte_core::error::{LatteError, Result};
use latte_core::session::SessionStore;

/// Route a forced logout redirects to.
pub const PUBLIC_LANDING_ROUTE: &str = "/login";

/// Fixed request timeout; exceeding it is a transport failure.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fallback when neither the response body nor the transport provides a
/// usable message.
const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// The sole network egress point.
///
/// Holds no state of its own; its only observable side effects are the
/// session-store mutation and the navigation request on a 401.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    environment: Arc<dyn Environment>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        session: Arc<dyn SessionStore>,
        environment: Arc<dyn Environment>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| LatteError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
            environment,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.dispatch(self.client.get(self.url(path))).await?;
        Self::parse(response).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.client.get(self.url(path)).query(query);
        let response = self.dispatch(request).await?;
        Self::parse(response).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.dispatch(request).await?;
        Self::parse(response).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.client.put(self.url(path)).json(body);
        let response = self.dispatch(request).await?;
        Self::parse(response).await
    }

    /// Issues a DELETE, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch(self.client.delete(self.url(path))).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends one request and enforces the outbound and inbound policies.
    async fn dispatch(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let request = match self.session.token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|err| {
            tracing::debug!("request failed at transport level: {err}");
            LatteError::transport(transport_message(&err))
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(self.handle_unauthorized(response).await);
        }
        if !status.is_success() {
            let message = extract_message(response.text().await.ok().as_deref());
            return Err(LatteError::api(status.as_u16(), message));
        }

        Ok(response)
    }

    /// Forced logout: clear the session, request the redirect, and still
    /// hand the caller an error. The redirect must not be assumed to stop
    /// the caller's error handler from running.
    async fn handle_unauthorized(&self, response: reqwest::Response) -> LatteError {
        tracing::info!("received 401, clearing session");
        if let Err(err) = self.session.clear_session().await {
            tracing::warn!("failed to clear session after 401: {err}");
        }
        self.environment.navigate_to(PUBLIC_LANDING_ROUTE);

        let message = extract_message(response.text().await.ok().as_deref());
        LatteError::unauthorized(message)
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        response
            .json()
            .await
            .map_err(|err| LatteError::transport(format!("failed to parse response: {err}")))
    }
}

/// Extracts the single human-readable message from an error response body:
/// server `error` field, then `message` field, then the generic fallback.
fn extract_message(body: Option<&str>) -> String {
    if let Some(body) = body {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            for key in ["error", "message"] {
                if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                    if !message.is_empty() {
                        return message.to_string();
                    }
                }
            }
        }
    }
    GENERIC_ERROR_MESSAGE.to_string()
}

fn transport_message(err: &reqwest::Error) -> String {
    let message = err.to_string();
    if message.is_empty() {
        GENERIC_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
