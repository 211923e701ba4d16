//! Admin resource client.
//!
//! Every operation here requires a token belonging to an administrator
//! account; the server answers 403 otherwise.

use std::sync::Arc;

use reqwest::{Method, StatusCode};

use crate::error::Error;
use crate::response;
use crate::transport::Transport;
use crate::types::{
    CreateOrganization, CreateRepository, CreateTeam, CreateUser, Organization, PublicKey,
    Repository, Team, UpdateUser, User,
};

/// Client for administrative operations.
pub struct AdminClient {
    transport: Arc<Transport>,
}

impl AdminClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Create a user account.
    ///
    /// `POST /admin/users` — 201.
    pub async fn create_user(&self, options: &CreateUser) -> Result<User, Error> {
        let response = self
            .transport
            .send(Method::POST, "admin/users", None, Some(options))
            .await?;

        response::json(response, &[StatusCode::CREATED]).await
    }

    /// Update a user account.
    ///
    /// `PATCH /admin/users/:username` — 200; an unknown user yields
    /// `None`.
    pub async fn update_user(
        &self,
        username: &str,
        patch: &UpdateUser,
    ) -> Result<Option<User>, Error> {
        let response = self
            .transport
            .send(
                Method::PATCH,
                &format!("admin/users/{username}"),
                None,
                Some(patch),
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }

    /// Delete a user account.
    ///
    /// `DELETE /admin/users/:username` — 204; an unknown user yields
    /// `false`.
    pub async fn delete_user(&self, username: &str) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::DELETE,
                &format!("admin/users/{username}"),
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

    /// Create a repository owned by an arbitrary user.
    ///
    /// `POST /admin/users/:username/repos` — 201; an unknown user
    /// yields `None`.
    pub async fn create_user_repo(
        &self,
        username: &str,
        options: &CreateRepository,
    ) -> Result<Option<Repository>, Error> {
        let response = self
            .transport
            .send(
                Method::POST,
                &format!("admin/users/{username}/repos"),
                None,
                Some(options),
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::CREATED]).await.map(Some)
    }

    /// Add a public key to an arbitrary user.
    ///
    /// `POST /admin/users/:username/keys` — 201; an unknown user yields
    /// `None`.
    pub async fn add_user_key(
        &self,
        username: &str,
        title: &str,
        key: &str,
    ) -> Result<Option<PublicKey>, Error> {
        let body = serde_json::json!({ "title": title, "key": key });
        let response = self
            .transport
            .send(
                Method::POST,
                &format!("admin/users/{username}/keys"),
                None,
                Some(&body),
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::CREATED]).await.map(Some)
    }

    /// Create an organization owned by an arbitrary user.
    ///
    /// `POST /admin/users/:username/orgs` — 201; an unknown user yields
    /// `None`.
    pub async fn create_org(
        &self,
        username: &str,
        options: &CreateOrganization,
    ) -> Result<Option<Organization>, Error> {
        let response = self
            .transport
            .send(
                Method::POST,
                &format!("admin/users/{username}/orgs"),
                None,
                Some(options),
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::CREATED]).await.map(Some)
    }

    /// Create a team inside an organization.
    ///
    /// `POST /admin/orgs/:orgname/teams` — 201.
    pub async fn create_team(&self, org: &str, options: &CreateTeam) -> Result<Team, Error> {
        let response = self
            .transport
            .send(
                Method::POST,
                &format!("admin/orgs/{org}/teams"),
                None,
                Some(options),
            )
            .await?;

        response::json(response, &[StatusCode::CREATED]).await
    }

    /// Add a member to a team. Idempotent.
    ///
    /// `PUT /admin/teams/:id/members/:username` — 204; an unknown team
    /// or user yields `false`.
    pub async fn add_team_member(&self, team_id: i64, username: &str) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::PUT,
                &format!("admin/teams/{team_id}/members/{username}"),
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

    /// Remove a member from a team. Idempotent.
    ///
    /// `DELETE /admin/teams/:id/members/:username` — 204; an unknown
    /// team or user yields `false`.
    pub async fn remove_team_member(&self, team_id: i64, username: &str) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::DELETE,
                &format!("admin/teams/{team_id}/members/{username}"),
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

    /// Grant a team access to a repository.
    ///
    /// `PUT /admin/teams/:id/repos/:repo` — 204; an unknown team or
    /// repository yields `false`.
    pub async fn add_team_repo(&self, team_id: i64, repo: &str) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::PUT,
                &format!("admin/teams/{team_id}/repos/{repo}"),
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

    /// Revoke a team's access to a repository.
    ///
    /// `DELETE /admin/teams/:id/repos/:repo` — 204; an unknown team or
    /// repository yields `false`.
    pub async fn remove_team_repo(&self, team_id: i64, repo: &str) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::DELETE,
                &format!("admin/teams/{team_id}/repos/{repo}"),
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
