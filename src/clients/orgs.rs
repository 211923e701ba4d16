//! Organizations resource client.

use std::sync::Arc;

use reqwest::{Method, StatusCode};

use crate::error::Error;
use crate::response;
use crate::transport::Transport;
use crate::types::{Organization, Team, UpdateOrganization};

/// Client for organization operations.
pub struct OrgsClient {
    transport: Arc<Transport>,
}

impl OrgsClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List organizations of the signed-in user.
    ///
    /// `GET /user/orgs` — 200.
    pub async fn current(&self) -> Result<Vec<Organization>, Error> {
        let response = self
            .transport
            .send(Method::GET, "user/orgs", None, None::<&()>)
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// List a user's organizations.
    ///
    /// `GET /users/:username/orgs` — 200; an unknown user yields an
    /// empty list.
    pub async fn list(&self, username: &str) -> Result<Vec<Organization>, Error> {
        let response = self
            .transport
            .send(Method::GET, &format!("users/{username}/orgs"), None, None::<&()>)
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        response::json(response, &[StatusCode::OK]).await
    }

    /// Get an organization.
    ///
    /// `GET /orgs/:orgname` — 200; 404 yields `None`.
    pub async fn get(&self, name: &str) -> Result<Option<Organization>, Error> {
        let response = self
            .transport
            .send(Method::GET, &format!("orgs/{name}"), None, None::<&()>)
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }

    /// Update an organization.
    ///
    /// `PATCH /orgs/:orgname` — 200; 404 yields `None`.
    pub async fn update(
        &self,
        name: &str,
        patch: &UpdateOrganization,
    ) -> Result<Option<Organization>, Error> {
        let response = self
            .transport
            .send(Method::PATCH, &format!("orgs/{name}"), None, Some(patch))
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }

    /// List an organization's teams.
    ///
    /// `GET /orgs/:orgname/teams` — 200.
    pub async fn list_teams(&self, name: &str) -> Result<Vec<Team>, Error> {
        let response = self
            .transport
            .send(Method::GET, &format!("orgs/{name}/teams"), None, None::<&()>)
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }
}
