//! Auth domain service: thin request/response mappers over the API client.

use serde::{Deserialize, Serialize};

use latte_core::error::Result;
use latte_core::identity::Identity;

use crate::client::ApiClient;
use crate::endpoints;

#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Wire shape for federated sign-in.
#[derive(Serialize)]
struct GoogleAuthRequest {
    id_token: String,
}

/// Payload of every successful auth call. The caller (view layer) is
/// responsible for storing it into the session store.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: Identity,
    pub token: String,
}

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse> {
        self.client.post(endpoints::AUTH_SIGNUP, request).await
    }

    pub async fn sign_in(&self, request: &SignInRequest) -> Result<AuthResponse> {
        self.client.post(endpoints::AUTH_SIGNIN, request).await
    }

    /// Exchanges a federated identity-provider credential for a local
    /// session.
    pub async fn google_auth(&self, id_token: impl Into<String>) -> Result<AuthResponse> {
        let request = GoogleAuthRequest {
            id_token: id_token.into(),
        };
        self.client.post(endpoints::AUTH_GOOGLE, &request).await
    }

    pub async fn current_user(&self) -> Result<Identity> {
        self.client.get(endpoints::AUTH_ME).await
    }
}
