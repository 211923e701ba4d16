//! Build statuses resource client.

use std::sync::Arc;

use reqwest::{Method, StatusCode};

use crate::error::Error;
use crate::response;
use crate::transport::Transport;
use crate::types::{BuildStatus, CreateStatus};

/// Client for commit build status operations.
pub struct StatusesClient {
    transport: Arc<Transport>,
}

impl StatusesClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List build statuses recorded for a repository.
    ///
    /// `GET /repos/:owner/:repo/statuses` — 200; an unknown repository
    /// yields `None` rather than an empty list.
    pub async fn list(&self, owner: &str, repo: &str) -> Result<Option<Vec<BuildStatus>>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/statuses"),
                None,
                None::<&()>,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }

    /// Attach a build status to a commit.
    ///
    /// `POST /repos/:owner/:repo/statuses/:sha` — 201; an unknown
    /// repository or commit yields `None`.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
        options: &CreateStatus,
    ) -> Result<Option<BuildStatus>, Error> {
        let response = self
            .transport
            .send(
                Method::POST,
                &format!("repos/{owner}/{repo}/statuses/{sha}"),
                None,
                Some(options),
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::CREATED]).await.map(Some)
    }
}
