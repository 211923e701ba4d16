//! Webhook data models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository webhook: a configuration map plus the event names that
/// trigger it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebHook {
    pub id: i64,
    /// Hook kind: "gogs" or "slack".
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub config: HashMap<String, String>,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for `POST /repos/:owner/:repo/hooks`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWebHook {
    #[serde(rename = "type")]
    pub kind: String,
    pub config: HashMap<String, String>,
    pub events: Vec<String>,
    pub active: bool,
}

impl CreateWebHook {
    /// Convenience constructor for the common case: a hook of the given
    /// kind posting to `url` with the given payload content type
    /// ("json" or "form").
    pub fn new(
        kind: impl Into<String>,
        url: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        let mut config = HashMap::new();
        config.insert("url".to_string(), url.into());
        config.insert("content_type".to_string(), content_type.into());

        Self {
            kind: kind.into(),
            config,
            events: vec!["push".to_string()],
            active: true,
        }
    }
}

/// Fields for `PATCH /repos/:owner/:repo/hooks/:id`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateWebHook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_deserializes_with_config_map() {
        let json = r#"{
            "id": 5,
            "type": "gogs",
            "config": {"url": "http://ci.local/hook", "content_type": "json"},
            "events": ["push", "create"],
            "active": true
        }"#;

        let hook: WebHook = serde_json::from_str(json).expect("deserialize");
        assert_eq!(hook.kind, "gogs");
        assert_eq!(hook.config["url"], "http://ci.local/hook");
        assert_eq!(hook.events, vec!["push", "create"]);
    }

    #[test]
    fn create_webhook_fills_config() {
        let create = CreateWebHook::new("gogs", "http://ci.local/hook", "json");

        let json = serde_json::to_value(&create).expect("serialize");
        assert_eq!(json["type"], "gogs");
        assert_eq!(json["config"]["url"], "http://ci.local/hook");
        assert_eq!(json["config"]["content_type"], "json");
        assert_eq!(json["active"], true);
    }
}
