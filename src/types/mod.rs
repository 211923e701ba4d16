//! Data model types mirroring Gogs JSON resources.
//!
//! Plain records with no behavior; the remote instance is the sole
//! source of truth for their contents.

pub mod hooks;
pub mod issues;
pub mod markdown;
pub mod orgs;
pub mod repos;
pub mod statuses;
pub mod users;

use serde::{Deserialize, Serialize};

// Re-exports
pub use hooks::{CreateWebHook, UpdateWebHook, WebHook};
pub use issues::{
    Comment, CreateComment, CreateIssue, CreateLabel, CreateMilestone, Issue, Label, Milestone,
    UpdateIssue, UpdateLabel, UpdateMilestone,
};
pub use markdown::MarkdownOptions;
pub use orgs::{CreateOrganization, CreateTeam, Organization, Team, UpdateOrganization};
pub use repos::{
    Branch, BranchCommit, CreateRepository, MigrateRepository, Permissions, Repository,
};
pub use statuses::{BuildStatus, CreateStatus};
pub use users::{AccessToken, CreateUser, Email, PublicKey, UpdateUser, User};

/// Search response wrapper: a page of results plus a success flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult<T> {
    pub data: Vec<T>,
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_result_deserializes() {
        let json = r#"{"data": [{"id": 1, "username": "gogs-user"}], "ok": true}"#;

        let result: SearchResult<User> = serde_json::from_str(json).expect("deserialize");
        assert!(result.ok);
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].username, "gogs-user");
    }
}
