//! The authenticated user's profile data held client-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile data for the signed-in user.
///
/// Produced only by successful auth responses and replaced wholesale by each
/// one; cleared on logout or on any authorization failure. The id is an
/// opaque string assigned by the backend, never minted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_absent_in_json() {
        let identity = Identity {
            id: "1".to_string(),
            email: "a@b.com".to_string(),
            name: "Ada".to_string(),
            bio: None,
            location_text: None,
            avatar_url: None,
            is_verified: false,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&identity).unwrap();
        assert!(json.get("bio").is_none());
        assert!(json.get("location_text").is_none());
        assert!(json.get("avatar_url").is_none());
    }

    #[test]
    fn test_deserializes_minimal_auth_payload() {
        let json = r#"{
            "id": "1",
            "email": "a@b.com",
            "name": "Ada",
            "is_verified": true,
            "created_at": "2026-01-15T09:00:00Z"
        }"#;

        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.id, "1");
        assert!(identity.is_verified);
        assert!(identity.bio.is_none());
    }
}
