//! Markdown rendering client.
//!
//! The only facade whose responses are HTML text rather than JSON.

use std::sync::Arc;

use reqwest::{Method, StatusCode};

use crate::error::Error;
use crate::response;
use crate::transport::Transport;
use crate::types::MarkdownOptions;

/// Client for server-side markdown rendering.
pub struct MarkdownClient {
    transport: Arc<Transport>,
}

impl MarkdownClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Render markdown with repository-aware link resolution.
    ///
    /// `POST /markdown` — 200, HTML body.
    pub async fn render(&self, options: &MarkdownOptions) -> Result<String, Error> {
        let response = self
            .transport
            .send(Method::POST, "markdown", None, Some(options))
            .await?;

        response::text(response, &[StatusCode::OK]).await
    }

    /// Render a plain markdown document.
    ///
    /// `POST /markdown/raw` — 200, HTML body.
    pub async fn render_raw(&self, text: &str) -> Result<String, Error> {
        let response = self
            .transport
            .send_text(Method::POST, "markdown/raw", text.to_string())
            .await?;

        response::text(response, &[StatusCode::OK]).await
    }
}
