//! User-related data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Gogs user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// Fields for `POST /admin/users`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_notify: Option<bool>,
}

impl CreateUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            full_name: None,
            send_notify: None,
        }
    }
}

/// Fields for `PATCH /admin/users/:username`. All optional; absent
/// fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
}

/// An email address registered on an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    pub email: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub primary: bool,
}

/// An access token. Creation requests carry only `name`; the server
/// fills in `sha1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub name: String,
    #[serde(default)]
    pub sha1: String,
}

/// An SSH public key attached to an account or repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicKey {
    pub id: i64,
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_with_missing_optionals() {
        let json = r#"{"id": 7, "username": "gogs-admin"}"#;

        let user: User = serde_json::from_str(json).expect("deserialize");
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "gogs-admin");
        assert!(user.email.is_empty());
    }

    #[test]
    fn create_user_skips_absent_fields() {
        let create = CreateUser::new("alice", "alice@example.com", "secret");

        let json = serde_json::to_value(&create).expect("serialize");
        assert_eq!(json["username"], "alice");
        assert!(json.get("full_name").is_none());
        assert!(json.get("send_notify").is_none());
    }

    #[test]
    fn access_token_round_trips() {
        let json = r#"{"name": "ci-token", "sha1": "5a855f3bcccb4127"}"#;

        let token: AccessToken = serde_json::from_str(json).expect("deserialize");
        assert_eq!(token.name, "ci-token");
        assert_eq!(token.sha1, "5a855f3bcccb4127");
    }
}
