//! Session domain models.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// Hydration-aware authentication status.
///
/// A freshly constructed store reports `Unknown` until persisted state has
/// been loaded. Consumers must treat `Unknown` as indeterminate, never as
/// logged-out, or a flash of unauthenticated UI appears on restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// An identity paired with its credential token.
///
/// The two are set and cleared together; holding them in one value makes a
/// token-without-identity state unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub identity: Identity,
    pub token: String,
}

/// Read-only copy of the session store contents handed to consumers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub session: Option<Session>,
    pub status: AuthStatus,
}

impl SessionSnapshot {
    /// Snapshot for an established session.
    pub fn authenticated(session: Session) -> Self {
        Self {
            session: Some(session),
            status: AuthStatus::Authenticated,
        }
    }

    /// Snapshot for a known logged-out state.
    pub fn unauthenticated() -> Self {
        Self {
            session: None,
            status: AuthStatus::Unauthenticated,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.identity)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }
}
