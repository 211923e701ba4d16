//! Webhooks resource client.

use std::sync::Arc;

use reqwest::{Method, StatusCode};

use crate::error::Error;
use crate::response;
use crate::transport::Transport;
use crate::types::{CreateWebHook, UpdateWebHook, WebHook};

/// Client for repository webhook operations.
pub struct HooksClient {
    transport: Arc<Transport>,
}

impl HooksClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List a repository's webhooks.
    ///
    /// `GET /repos/:owner/:repo/hooks` — 200.
    pub async fn list(&self, owner: &str, repo: &str) -> Result<Vec<WebHook>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/hooks"),
                None,
                None::<&()>,
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Create a webhook.
    ///
    /// `POST /repos/:owner/:repo/hooks` — 201; an unknown repository
    /// yields `None`.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        options: &CreateWebHook,
    ) -> Result<Option<WebHook>, Error> {
        let response = self
            .transport
            .send(
                Method::POST,
                &format!("repos/{owner}/{repo}/hooks"),
                None,
                Some(options),
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::CREATED]).await.map(Some)
    }

    /// Update a webhook.
    ///
    /// `PATCH /repos/:owner/:repo/hooks/:id` — 200; 404 yields `None`.
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        id: i64,
        patch: &UpdateWebHook,
    ) -> Result<Option<WebHook>, Error> {
        let response = self
            .transport
            .send(
                Method::PATCH,
                &format!("repos/{owner}/{repo}/hooks/{id}"),
                None,
                Some(patch),
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }

    /// Delete a webhook.
    ///
    /// `DELETE /repos/:owner/:repo/hooks/:id` — 204; an unknown hook
    /// yields `false`.
    pub async fn delete(&self, owner: &str, repo: &str, id: i64) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::DELETE,
                &format!("repos/{owner}/{repo}/hooks/{id}"),
                None,
                None::<&()>,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        response::unit(response, &[StatusCode::NO_CONTENT]).await?;
        Ok(true)
    }
}
