//! Commit build status data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::users::User;

/// A build status attached to a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildStatus {
    pub id: i64,
    /// "pending", "success", "error", "failure" or "warning".
    pub status: String,
    #[serde(default)]
    pub target_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub creator: Option<User>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for `POST /repos/:owner/:repo/statuses/:sha`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl CreateStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            target_url: None,
            description: None,
            context: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_status_deserializes() {
        let json = r#"{
            "id": 9,
            "status": "success",
            "target_url": "http://ci.local/build/9",
            "context": "ci/build"
        }"#;

        let status: BuildStatus = serde_json::from_str(json).expect("deserialize");
        assert_eq!(status.status, "success");
        assert_eq!(status.context, "ci/build");
        assert!(status.creator.is_none());
    }
}
