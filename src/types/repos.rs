//! Repository data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::users::User;

/// Access rights of the requesting user on a repository.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub pull: bool,
}

/// A Gogs repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: i64,
    pub owner: User,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub ssh_url: String,
    #[serde(default)]
    pub clone_url: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub stars_count: i64,
    #[serde(default)]
    pub forks_count: i64,
    #[serde(default)]
    pub watchers_count: i64,
    #[serde(default)]
    pub open_issues_count: i64,
    #[serde(default)]
    pub default_branch: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub permissions: Option<Permissions>,
}

/// Fields for `POST /user/repos` and `POST /org/:orgname/repos`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepository {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub private: bool,
    pub auto_init: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignores: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
}

impl CreateRepository {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            private: false,
            auto_init: false,
            gitignores: None,
            license: None,
            readme: None,
        }
    }
}

/// Fields for `POST /repos/migrate`.
#[derive(Debug, Clone, Serialize)]
pub struct MigrateRepository {
    pub clone_addr: String,
    /// Numeric id of the user or organization that will own the mirror.
    pub uid: i64,
    pub repo_name: String,
    pub mirror: bool,
    pub private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_password: Option<String>,
}

/// A repository branch with its tip commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: BranchCommit,
}

/// Tip commit summary as embedded in a branch listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchCommit {
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_deserializes() {
        let json = r#"{
            "id": 42,
            "owner": {"id": 1, "username": "gogs-user"},
            "name": "test-repo",
            "full_name": "gogs-user/test-repo",
            "private": true,
            "clone_url": "http://gogs.local/gogs-user/test-repo.git",
            "stars_count": 3,
            "default_branch": "master",
            "permissions": {"admin": true, "push": true, "pull": true}
        }"#;

        let repo: Repository = serde_json::from_str(json).expect("deserialize");
        assert_eq!(repo.full_name, "gogs-user/test-repo");
        assert!(repo.private);
        assert_eq!(repo.stars_count, 3);
        assert!(repo.permissions.is_some_and(|p| p.admin));
    }

    #[test]
    fn create_repository_serializes_flags() {
        let mut create = CreateRepository::new("demo");
        create.private = true;
        create.auto_init = true;

        let json = serde_json::to_value(&create).expect("serialize");
        assert_eq!(json["name"], "demo");
        assert_eq!(json["private"], true);
        assert!(json.get("license").is_none());
    }

    #[test]
    fn branch_deserializes() {
        let json = r#"{
            "name": "master",
            "commit": {"id": "d6cf9e8", "message": "initial commit"}
        }"#;

        let branch: Branch = serde_json::from_str(json).expect("deserialize");
        assert_eq!(branch.name, "master");
        assert_eq!(branch.commit.id, "d6cf9e8");
    }
}
