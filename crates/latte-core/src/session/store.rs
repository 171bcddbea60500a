//! Session store trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::identity::Identity;
use crate::session::model::SessionSnapshot;

/// Single source of truth for the authenticated session.
///
/// Implementations are explicit, dependency-injected containers shared as
/// `Arc<dyn SessionStore>`; every mutation must leave the store fully
/// consistent before any other task can observe it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores identity and token atomically and persists both to durable
    /// storage, marking the store authenticated.
    async fn set_session(&self, identity: Identity, token: String) -> Result<()>;

    /// Clears the in-memory and persisted session. Idempotent: clearing a
    /// logged-out store is a no-op with no error.
    async fn clear_session(&self) -> Result<()>;

    /// Replaces the identity without touching the token (used after profile
    /// edits). Silent no-op when no session exists.
    async fn update_identity(&self, identity: Identity) -> Result<()>;

    /// Returns a read-only copy of the current store contents.
    async fn snapshot(&self) -> SessionSnapshot;

    /// Returns the credential token, if a session is established.
    async fn token(&self) -> Option<String>;
}
