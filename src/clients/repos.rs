//! Repositories resource client.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::{Method, StatusCode};

use crate::error::Error;
use crate::response;
use crate::transport::Transport;
use crate::types::{
    Branch, CreateRepository, MigrateRepository, PublicKey, Repository, SearchResult,
};

/// Client for repository operations.
pub struct ReposClient {
    transport: Arc<Transport>,
}

impl ReposClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List repositories accessible to the signed-in user.
    ///
    /// `GET /user/repos` — 200.
    pub async fn list(&self) -> Result<Vec<Repository>, Error> {
        let response = self
            .transport
            .send(Method::GET, "user/repos", None, None::<&()>)
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Create a repository owned by the signed-in user.
    ///
    /// `POST /user/repos` — 201.
    pub async fn create(&self, options: &CreateRepository) -> Result<Repository, Error> {
        let response = self
            .transport
            .send(Method::POST, "user/repos", None, Some(options))
            .await?;

        response::json(response, &[StatusCode::CREATED]).await
    }

    /// Create a repository owned by an organization.
    ///
    /// `POST /org/:orgname/repos` — 201; an unknown organization yields
    /// `None`.
    pub async fn create_for_org(
        &self,
        org: &str,
        options: &CreateRepository,
    ) -> Result<Option<Repository>, Error> {
        let response = self
            .transport
            .send(Method::POST, &format!("org/{org}/repos"), None, Some(options))
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::CREATED]).await.map(Some)
    }

    /// Search repositories.
    ///
    /// `GET /repos/search` — 200. `uid` of 0 searches across all users.
    pub async fn search(
        &self,
        query: &str,
        uid: i64,
        limit: Option<u32>,
    ) -> Result<SearchResult<Repository>, Error> {
        let mut params = vec![("q", query.to_string()), ("uid", uid.to_string())];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }

        let response = self
            .transport
            .send(Method::GET, "repos/search", Some(&params), None::<&()>)
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Migrate an external repository into this instance.
    ///
    /// `POST /repos/migrate` — 201.
    pub async fn migrate(&self, options: &MigrateRepository) -> Result<Repository, Error> {
        let response = self
            .transport
            .send(Method::POST, "repos/migrate", None, Some(options))
            .await?;

        response::json(response, &[StatusCode::CREATED]).await
    }

    /// Get a repository.
    ///
    /// `GET /repos/:owner/:repo` — 200; 404 yields `None`.
    pub async fn get(&self, owner: &str, repo: &str) -> Result<Option<Repository>, Error> {
        let response = self
            .transport
            .send(Method::GET, &format!("repos/{owner}/{repo}"), None, None::<&()>)
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }

    /// Delete a repository.
    ///
    /// `DELETE /repos/:owner/:repo` — 204; an unknown repository yields
    /// `false`.
    pub async fn delete(&self, owner: &str, repo: &str) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::DELETE,
                &format!("repos/{owner}/{repo}"),
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

    /// List a repository's branches.
    ///
    /// `GET /repos/:owner/:repo/branches` — 200.
    pub async fn list_branches(&self, owner: &str, repo: &str) -> Result<Vec<Branch>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/branches"),
                None,
                None::<&()>,
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Get a single branch.
    ///
    /// `GET /repos/:owner/:repo/branches/:name` — 200; 404 yields `None`.
    pub async fn get_branch(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> Result<Option<Branch>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/branches/{name}"),
                None,
                None::<&()>,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }

    /// List a repository's deploy keys.
    ///
    /// `GET /repos/:owner/:repo/keys` — 200.
    pub async fn list_deploy_keys(&self, owner: &str, repo: &str) -> Result<Vec<PublicKey>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/keys"),
                None,
                None::<&()>,
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Add a deploy key to a repository.
    ///
    /// `POST /repos/:owner/:repo/keys` — 201.
    pub async fn add_deploy_key(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        key: &str,
    ) -> Result<PublicKey, Error> {
        let body = serde_json::json!({ "title": title, "key": key });
        let response = self
            .transport
            .send(
                Method::POST,
                &format!("repos/{owner}/{repo}/keys"),
                None,
                Some(&body),
            )
            .await?;

        response::json(response, &[StatusCode::CREATED]).await
    }

    /// Get a single deploy key.
    ///
    /// `GET /repos/:owner/:repo/keys/:id` — 200; 404 yields `None`.
    pub async fn get_deploy_key(
        &self,
        owner: &str,
        repo: &str,
        id: i64,
    ) -> Result<Option<PublicKey>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/keys/{id}"),
                None,
                None::<&()>,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }

    /// Delete a deploy key.
    ///
    /// `DELETE /repos/:owner/:repo/keys/:id` — 204; an unknown key
    /// yields `false`.
    pub async fn delete_deploy_key(&self, owner: &str, repo: &str, id: i64) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::DELETE,
                &format!("repos/{owner}/{repo}/keys/{id}"),
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

    /// Add a collaborator to a repository.
    ///
    /// `PUT /repos/:owner/:repo/collaborators/:username` — 204.
    /// Idempotent; repeating grants the same permission again.
    pub async fn add_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
        permission: Option<&str>,
    ) -> Result<(), Error> {
        let body = permission.map(|p| serde_json::json!({ "permission": p }));
        let response = self
            .transport
            .send(
                Method::PUT,
                &format!("repos/{owner}/{repo}/collaborators/{username}"),
                None,
                body.as_ref(),
            )
            .await?;

        response::unit(response, &[StatusCode::NO_CONTENT]).await
    }

    /// Fetch the raw content of a file at a git reference.
    ///
    /// `GET /repos/:owner/:repo/raw/:ref/:path` — 200.
    pub async fn raw(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
        path: &str,
    ) -> Result<Vec<u8>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/raw/{reference}/{path}"),
                None,
                None::<&()>,
            )
            .await?;

        response::bytes(response, &[StatusCode::OK]).await
    }

    /// Download a repository archive at a git reference.
    ///
    /// `GET /repos/:owner/:repo/archive/:ref.:format` — 200. `format`
    /// is "zip" or "tar.gz".
    pub async fn archive(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
        format: &str,
    ) -> Result<Vec<u8>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/archive/{reference}.{format}"),
                None,
                None::<&()>,
            )
            .await?;

        response::bytes(response, &[StatusCode::OK]).await
    }

    /// Get the effective editorconfig properties for a file.
    ///
    /// `GET /repos/:owner/:repo/editorconfig/:path` — 200; 404 yields
    /// `None`.
    pub async fn editorconfig(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<HashMap<String, serde_json::Value>>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/editorconfig/{path}"),
                None,
                None::<&()>,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }
}
