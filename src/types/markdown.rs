//! Markdown rendering request model.

use serde::Serialize;

/// Body for `POST /markdown`.
#[derive(Debug, Clone, Serialize)]
pub struct MarkdownOptions {
    pub text: String,
    /// "gfm" for repository-context rendering, "markdown" for plain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Repository path (`owner/repo`) used to resolve relative links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl MarkdownOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: None,
            context: None,
        }
    }
}
