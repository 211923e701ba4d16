//! Organization and team data models.

use serde::{Deserialize, Serialize};

/// A Gogs organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub location: String,
}

/// Fields for `POST /admin/users/:username/orgs`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrganization {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CreateOrganization {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            full_name: None,
            description: None,
            website: None,
            location: None,
        }
    }
}

/// Fields for `PATCH /orgs/:orgname`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOrganization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// An organization team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Access level: "read", "write" or "admin".
    #[serde(default)]
    pub permission: String,
}

/// Fields for `POST /admin/orgs/:orgname/teams`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTeam {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub permission: String,
}

impl CreateTeam {
    pub fn new(name: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            permission: permission.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_deserializes() {
        let json = r#"{
            "id": 3,
            "username": "aye-solutions",
            "full_name": "AYE Solutions",
            "description": "software",
            "website": "https://aye-solutions.de",
            "location": ""
        }"#;

        let org: Organization = serde_json::from_str(json).expect("deserialize");
        assert_eq!(org.username, "aye-solutions");
        assert_eq!(org.full_name, "AYE Solutions");
    }

    #[test]
    fn team_permission_defaults_to_empty() {
        let json = r#"{"id": 1, "name": "owners"}"#;

        let team: Team = serde_json::from_str(json).expect("deserialize");
        assert_eq!(team.name, "owners");
        assert!(team.permission.is_empty());
    }
}
