//! File-backed session store implementation.
//!
//! Persists the session as two entries under the config directory: a
//! credential token entry with a fixed 7-day expiry (`token.json`) and the
//! session blob (`auth-storage.json`). The in-memory snapshot is hydrated
//! from both before the constructor returns, so no consumer ever reads the
//! store in its pre-hydration `Unknown` state.

use std::io::ErrorKind;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use latte_core::error::Result;
use latte_core::identity::Identity;
use latte_core::session::{Session, SessionSnapshot, SessionStore};

use crate::paths::LattePaths;

/// Fixed lifetime of the persisted token entry, independent of the token's
/// own expiry.
const TOKEN_TTL_DAYS: i64 = 7;

/// Durable form of the credential token, the cookie-equivalent entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

impl TokenEntry {
    fn new(value: String) -> Self {
        Self {
            value,
            expires_at: Utc::now() + Duration::days(TOKEN_TTL_DAYS),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Durable form of the session blob. Field names match the historical
/// `auth-storage` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthStorage {
    user: Option<Identity>,
    token: Option<String>,
    is_authenticated: bool,
}

/// File-backed [`SessionStore`].
#[derive(Clone)]
pub struct FileSessionStore {
    /// Cached snapshot; the lock is held across the whole
    /// read-modify-write-persist sequence of each mutation.
    state: Arc<Mutex<SessionSnapshot>>,
    paths: LattePaths,
}

impl FileSessionStore {
    /// Creates the store and hydrates it from durable storage.
    ///
    /// Hydration failures (unreadable or corrupt blobs, an expired token
    /// entry) degrade to an unauthenticated store; they never fail the
    /// constructor.
    pub async fn load(paths: LattePaths) -> Self {
        let snapshot = Self::hydrate(&paths).await;
        Self {
            state: Arc::new(Mutex::new(snapshot)),
            paths,
        }
    }

    async fn hydrate(paths: &LattePaths) -> SessionSnapshot {
        let entry = match read_json::<TokenEntry>(&paths.token_file()).await {
            Some(entry) if !entry.is_expired() => entry,
            Some(_) => {
                tracing::info!("persisted token entry expired, discarding session");
                remove_persisted(paths).await;
                return SessionSnapshot::unauthenticated();
            }
            None => return SessionSnapshot::unauthenticated(),
        };

        let storage = read_json::<AuthStorage>(&paths.auth_storage_file())
            .await
            .unwrap_or_default();

        match (storage.user, storage.token) {
            (Some(identity), Some(token)) if token == entry.value => {
                tracing::debug!(user_id = %identity.id, "session rehydrated");
                SessionSnapshot::authenticated(Session { identity, token })
            }
            _ => {
                // Token entry without a matching blob is unusable.
                remove_persisted(paths).await;
                SessionSnapshot::unauthenticated()
            }
        }
    }

    async fn persist(&self, identity: &Identity, token: &str) -> Result<()> {
        self.paths.ensure_config_dir().await?;
        write_json(&self.paths.token_file(), &TokenEntry::new(token.to_string())).await?;
        write_json(
            &self.paths.auth_storage_file(),
            &AuthStorage {
                user: Some(identity.clone()),
                token: Some(token.to_string()),
                is_authenticated: true,
            },
        )
        .await
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn set_session(&self, identity: Identity, token: String) -> Result<()> {
        let mut state = self.state.lock().await;
        self.persist(&identity, &token).await?;
        *state = SessionSnapshot::authenticated(Session { identity, token });
        tracing::debug!("session established");
        Ok(())
    }

    async fn clear_session(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        remove_persisted(&self.paths).await;
        *state = SessionSnapshot::unauthenticated();
        tracing::debug!("session cleared");
        Ok(())
    }

    async fn update_identity(&self, identity: Identity) -> Result<()> {
        let mut state = self.state.lock().await;
        let Some(session) = state.session.clone() else {
            // No session to update; silent no-op.
            return Ok(());
        };

        self.paths.ensure_config_dir().await?;
        write_json(
            &self.paths.auth_storage_file(),
            &AuthStorage {
                user: Some(identity.clone()),
                token: Some(session.token.clone()),
                is_authenticated: true,
            },
        )
        .await?;

        *state = SessionSnapshot::authenticated(Session {
            identity,
            token: session.token,
        });
        Ok(())
    }

    async fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().await.clone()
    }

    async fn token(&self) -> Option<String> {
        self.state.lock().await.token().map(str::to_string)
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Option<T> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return None,
        Err(err) => {
            tracing::warn!(path = %path.display(), "failed to read persisted state: {err}");
            return None;
        }
    };
    if content.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(path = %path.display(), "failed to parse persisted state: {err}");
            None
        }
    }
}

async fn write_json<T: Serialize>(path: &std::path::Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, content).await?;
    Ok(())
}

/// Best-effort removal of both persisted entries; missing files are fine.
async fn remove_persisted(paths: &LattePaths) {
    for path in [paths.token_file(), paths.auth_storage_file()] {
        if let Err(err) = tokio::fs::remove_file(&path).await {
            if err.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), "failed to remove persisted state: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latte_core::session::AuthStatus;
    use tempfile::tempdir;

    fn identity(id: &str) -> Identity {
        Identity {
            id: id.to_string(),
            email: "a@b.com".to_string(),
            name: "Ada".to_string(),
            bio: None,
            location_text: None,
            avatar_url: None,
            is_verified: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_fresh_store_is_unauthenticated() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::load(LattePaths::new(Some(dir.path())).unwrap()).await;

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.status, AuthStatus::Unauthenticated);
        assert!(snapshot.session.is_none());
    }

    #[tokio::test]
    async fn test_set_session_stores_both_values() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::load(LattePaths::new(Some(dir.path())).unwrap()).await;

        store
            .set_session(identity("1"), "tok".to_string())
            .await
            .unwrap();

        let snapshot = store.snapshot().await;
        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.identity().unwrap().id, "1");
        assert_eq!(snapshot.token(), Some("tok"));
        assert_eq!(store.token().await, Some("tok".to_string()));
    }

    #[tokio::test]
    async fn test_session_survives_restart() {
        let dir = tempdir().unwrap();
        let paths = LattePaths::new(Some(dir.path())).unwrap();

        let store = FileSessionStore::load(paths.clone()).await;
        store
            .set_session(identity("1"), "tok".to_string())
            .await
            .unwrap();
        drop(store);

        let rehydrated = FileSessionStore::load(paths).await;
        let snapshot = rehydrated.snapshot().await;
        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.identity().unwrap().id, "1");
        assert_eq!(snapshot.token(), Some("tok"));
    }

    #[tokio::test]
    async fn test_clear_session_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::load(LattePaths::new(Some(dir.path())).unwrap()).await;

        store
            .set_session(identity("1"), "tok".to_string())
            .await
            .unwrap();
        store.clear_session().await.unwrap();
        // Clearing a logged-out store is a no-op with no error.
        store.clear_session().await.unwrap();

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.status, AuthStatus::Unauthenticated);
        assert!(snapshot.identity().is_none());
        assert!(snapshot.token().is_none());
    }

    #[tokio::test]
    async fn test_clear_removes_persisted_state() {
        let dir = tempdir().unwrap();
        let paths = LattePaths::new(Some(dir.path())).unwrap();

        let store = FileSessionStore::load(paths.clone()).await;
        store
            .set_session(identity("1"), "tok".to_string())
            .await
            .unwrap();
        store.clear_session().await.unwrap();

        assert!(!paths.token_file().exists());
        assert!(!paths.auth_storage_file().exists());

        let rehydrated = FileSessionStore::load(paths).await;
        assert_eq!(
            rehydrated.snapshot().await.status,
            AuthStatus::Unauthenticated
        );
    }

    #[tokio::test]
    async fn test_update_identity_keeps_token() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::load(LattePaths::new(Some(dir.path())).unwrap()).await;

        store
            .set_session(identity("1"), "tok".to_string())
            .await
            .unwrap();

        let mut edited = identity("1");
        edited.name = "Ada Lovelace".to_string();
        store.update_identity(edited).await.unwrap();

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.identity().unwrap().name, "Ada Lovelace");
        assert_eq!(snapshot.token(), Some("tok"));
    }

    #[tokio::test]
    async fn test_update_identity_without_session_is_noop() {
        let dir = tempdir().unwrap();
        let paths = LattePaths::new(Some(dir.path())).unwrap();
        let store = FileSessionStore::load(paths.clone()).await;

        store.update_identity(identity("1")).await.unwrap();

        let snapshot = store.snapshot().await;
        assert!(snapshot.session.is_none());
        assert!(!paths.auth_storage_file().exists());
    }

    #[tokio::test]
    async fn test_expired_token_entry_discards_session() {
        let dir = tempdir().unwrap();
        let paths = LattePaths::new(Some(dir.path())).unwrap();

        let store = FileSessionStore::load(paths.clone()).await;
        store
            .set_session(identity("1"), "tok".to_string())
            .await
            .unwrap();
        drop(store);

        // Age the token entry past its 7-day window.
        let stale = TokenEntry {
            value: "tok".to_string(),
            expires_at: Utc::now() - Duration::days(1),
        };
        std::fs::write(
            paths.token_file(),
            serde_json::to_string(&stale).unwrap(),
        )
        .unwrap();

        let rehydrated = FileSessionStore::load(paths).await;
        let snapshot = rehydrated.snapshot().await;
        assert_eq!(snapshot.status, AuthStatus::Unauthenticated);
        assert!(snapshot.identity().is_none());
        assert!(snapshot.token().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_blob_degrades_to_unauthenticated() {
        let dir = tempdir().unwrap();
        let paths = LattePaths::new(Some(dir.path())).unwrap();
        std::fs::create_dir_all(paths.config_dir()).unwrap();
        std::fs::write(paths.token_file(), "not json").unwrap();

        let store = FileSessionStore::load(paths).await;
        assert_eq!(store.snapshot().await.status, AuthStatus::Unauthenticated);
    }
}
