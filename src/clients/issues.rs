//! Issues resource client: issues, comments, labels, milestones.

use std::sync::Arc;

use reqwest::{Method, StatusCode};

use crate::error::Error;
use crate::response;
use crate::transport::Transport;
use crate::types::{
    Comment, CreateComment, CreateIssue, CreateLabel, CreateMilestone, Issue, Label, Milestone,
    UpdateIssue, UpdateLabel, UpdateMilestone,
};

/// Client for issue tracker operations.
pub struct IssuesClient {
    transport: Arc<Transport>,
}

impl IssuesClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List a repository's issues.
    ///
    /// `GET /repos/:owner/:repo/issues` — 200.
    pub async fn list(&self, owner: &str, repo: &str) -> Result<Vec<Issue>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/issues"),
                None,
                None::<&()>,
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Open a new issue.
    ///
    /// `POST /repos/:owner/:repo/issues` — 201.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        options: &CreateIssue,
    ) -> Result<Issue, Error> {
        let response = self
            .transport
            .send(
                Method::POST,
                &format!("repos/{owner}/{repo}/issues"),
                None,
                Some(options),
            )
            .await?;

        response::json(response, &[StatusCode::CREATED]).await
    }

    /// Get an issue by its per-repository index.
    ///
    /// `GET /repos/:owner/:repo/issues/:index` — 200; 404 yields `None`.
    pub async fn get(&self, owner: &str, repo: &str, index: i64) -> Result<Option<Issue>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/issues/{index}"),
                None,
                None::<&()>,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }

    /// Update an issue.
    ///
    /// `PATCH /repos/:owner/:repo/issues/:index` — 200.
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        index: i64,
        patch: &UpdateIssue,
    ) -> Result<Issue, Error> {
        let response = self
            .transport
            .send(
                Method::PATCH,
                &format!("repos/{owner}/{repo}/issues/{index}"),
                None,
                Some(patch),
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// List comments on an issue.
    ///
    /// `GET /repos/:owner/:repo/issues/:index/comments` — 200.
    pub async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        index: i64,
    ) -> Result<Vec<Comment>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/issues/{index}/comments"),
                None,
                None::<&()>,
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Comment on an issue.
    ///
    /// `POST /repos/:owner/:repo/issues/:index/comments` — 201.
    pub async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        index: i64,
        body: &str,
    ) -> Result<Comment, Error> {
        let options = CreateComment {
            body: body.to_string(),
        };
        let response = self
            .transport
            .send(
                Method::POST,
                &format!("repos/{owner}/{repo}/issues/{index}/comments"),
                None,
                Some(&options),
            )
            .await?;

        response::json(response, &[StatusCode::CREATED]).await
    }

    /// Edit a comment.
    ///
    /// `PATCH /repos/:owner/:repo/issues/:index/comments/:id` — 200.
    pub async fn update_comment(
        &self,
        owner: &str,
        repo: &str,
        index: i64,
        id: i64,
        body: &str,
    ) -> Result<Comment, Error> {
        let options = CreateComment {
            body: body.to_string(),
        };
        let response = self
            .transport
            .send(
                Method::PATCH,
                &format!("repos/{owner}/{repo}/issues/{index}/comments/{id}"),
                None,
                Some(&options),
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// List a repository's labels.
    ///
    /// `GET /repos/:owner/:repo/labels` — 200.
    pub async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/labels"),
                None,
                None::<&()>,
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Create a label.
    ///
    /// `POST /repos/:owner/:repo/labels` — 201.
    pub async fn create_label(
        &self,
        owner: &str,
        repo: &str,
        options: &CreateLabel,
    ) -> Result<Label, Error> {
        let response = self
            .transport
            .send(
                Method::POST,
                &format!("repos/{owner}/{repo}/labels"),
                None,
                Some(options),
            )
            .await?;

        response::json(response, &[StatusCode::CREATED]).await
    }

    /// Get a label.
    ///
    /// `GET /repos/:owner/:repo/labels/:id` — 200; 404 yields `None`.
    pub async fn get_label(
        &self,
        owner: &str,
        repo: &str,
        id: i64,
    ) -> Result<Option<Label>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/labels/{id}"),
                None,
                None::<&()>,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }

    /// Update a label.
    ///
    /// `PATCH /repos/:owner/:repo/labels/:id` — 200.
    pub async fn update_label(
        &self,
        owner: &str,
        repo: &str,
        id: i64,
        patch: &UpdateLabel,
    ) -> Result<Label, Error> {
        let response = self
            .transport
            .send(
                Method::PATCH,
                &format!("repos/{owner}/{repo}/labels/{id}"),
                None,
                Some(patch),
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Delete a label.
    ///
    /// `DELETE /repos/:owner/:repo/labels/:id` — 204; an unknown label
    /// yields `false`.
    pub async fn delete_label(&self, owner: &str, repo: &str, id: i64) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::DELETE,
                &format!("repos/{owner}/{repo}/labels/{id}"),
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

    /// List the labels attached to an issue.
    ///
    /// `GET /repos/:owner/:repo/issues/:index/labels` — 200.
    pub async fn list_issue_labels(
        &self,
        owner: &str,
        repo: &str,
        index: i64,
    ) -> Result<Vec<Label>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/issues/{index}/labels"),
                None,
                None::<&()>,
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Attach labels to an issue, keeping existing ones.
    ///
    /// `POST /repos/:owner/:repo/issues/:index/labels` — 200.
    pub async fn add_issue_labels(
        &self,
        owner: &str,
        repo: &str,
        index: i64,
        label_ids: &[i64],
    ) -> Result<Vec<Label>, Error> {
        let body = serde_json::json!({ "labels": label_ids });
        let response = self
            .transport
            .send(
                Method::POST,
                &format!("repos/{owner}/{repo}/issues/{index}/labels"),
                None,
                Some(&body),
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Replace an issue's labels wholesale.
    ///
    /// `PUT /repos/:owner/:repo/issues/:index/labels` — 200.
    pub async fn replace_issue_labels(
        &self,
        owner: &str,
        repo: &str,
        index: i64,
        label_ids: &[i64],
    ) -> Result<Vec<Label>, Error> {
        let body = serde_json::json!({ "labels": label_ids });
        let response = self
            .transport
            .send(
                Method::PUT,
                &format!("repos/{owner}/{repo}/issues/{index}/labels"),
                None,
                Some(&body),
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Remove every label from an issue.
    ///
    /// `DELETE /repos/:owner/:repo/issues/:index/labels` — 204.
    pub async fn clear_issue_labels(
        &self,
        owner: &str,
        repo: &str,
        index: i64,
    ) -> Result<(), Error> {
        let response = self
            .transport
            .send(
                Method::DELETE,
                &format!("repos/{owner}/{repo}/issues/{index}/labels"),
                None,
                None::<&()>,
            )
            .await?;

        response::unit(response, &[StatusCode::NO_CONTENT]).await
    }

    /// List a repository's milestones.
    ///
    /// `GET /repos/:owner/:repo/milestones` — 200.
    pub async fn list_milestones(&self, owner: &str, repo: &str) -> Result<Vec<Milestone>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/milestones"),
                None,
                None::<&()>,
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Create a milestone.
    ///
    /// `POST /repos/:owner/:repo/milestones` — 201.
    pub async fn create_milestone(
        &self,
        owner: &str,
        repo: &str,
        options: &CreateMilestone,
    ) -> Result<Milestone, Error> {
        let response = self
            .transport
            .send(
                Method::POST,
                &format!("repos/{owner}/{repo}/milestones"),
                None,
                Some(options),
            )
            .await?;

        response::json(response, &[StatusCode::CREATED]).await
    }

    /// Get a milestone.
    ///
    /// `GET /repos/:owner/:repo/milestones/:id` — 200; 404 yields `None`.
    pub async fn get_milestone(
        &self,
        owner: &str,
        repo: &str,
        id: i64,
    ) -> Result<Option<Milestone>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("repos/{owner}/{repo}/milestones/{id}"),
                None,
                None::<&()>,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }

    /// Update a milestone.
    ///
    /// `PATCH /repos/:owner/:repo/milestones/:id` — 200.
    pub async fn update_milestone(
        &self,
        owner: &str,
        repo: &str,
        id: i64,
        patch: &UpdateMilestone,
    ) -> Result<Milestone, Error> {
        let response = self
            .transport
            .send(
                Method::PATCH,
                &format!("repos/{owner}/{repo}/milestones/{id}"),
                None,
                Some(patch),
            )
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Delete a milestone.
    ///
    /// `DELETE /repos/:owner/:repo/milestones/:id` — 204; an unknown
    /// milestone yields `false`.
    pub async fn delete_milestone(&self, owner: &str, repo: &str, id: i64) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::DELETE,
                &format!("repos/{owner}/{repo}/milestones/{id}"),
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
