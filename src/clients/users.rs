//! Users resource client.

use std::sync::Arc;

use reqwest::{Method, StatusCode};

use crate::error::Error;
use crate::response;
use crate::transport::Transport;
use crate::types::{AccessToken, Email, PublicKey, SearchResult, User};

/// Client for user and account operations.
pub struct UsersClient {
    transport: Arc<Transport>,
}

impl UsersClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Search for users.
    ///
    /// `GET /users/search` — 200. Works unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] on any non-200 status.
    pub async fn search(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<SearchResult<User>, Error> {
        let mut params = vec![("q", query.to_string())];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }

        let response = self
            .transport
            .send(Method::GET, "users/search", Some(&params), None::<&()>)
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Get a user's profile.
    ///
    /// `GET /users/:username` — 200. Unlike most single-resource reads
    /// in this API, a missing user raises rather than returning `None`.
    pub async fn get(&self, username: &str) -> Result<User, Error> {
        let response = self
            .transport
            .send(Method::GET, &format!("users/{username}"), None, None::<&()>)
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Get the signed-in user.
    ///
    /// `GET /user` — 200.
    pub async fn current(&self) -> Result<User, Error> {
        let response = self
            .transport
            .send(Method::GET, "user", None, None::<&()>)
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// List a user's access tokens. Served under basic auth only.
    ///
    /// `GET /users/:username/tokens` — 200.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the client credential has
    /// no username/password pair.
    pub async fn list_tokens(&self, username: &str) -> Result<Vec<AccessToken>, Error> {
        let response = self
            .transport
            .send_basic(Method::GET, &format!("users/{username}/tokens"), None::<&()>)
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Create an access token. Served under basic auth only.
    ///
    /// `POST /users/:username/tokens` — 201.
    pub async fn create_token(&self, username: &str, name: &str) -> Result<AccessToken, Error> {
        let body = AccessToken {
            name: name.to_string(),
            sha1: String::new(),
        };
        let response = self
            .transport
            .send_basic(Method::POST, &format!("users/{username}/tokens"), Some(&body))
            .await?;

        response::json(response, &[StatusCode::CREATED]).await
    }

    /// List a user's public keys.
    ///
    /// `GET /users/:username/keys` — 200; an unknown user yields an
    /// empty list.
    pub async fn list_public_keys(&self, username: &str) -> Result<Vec<PublicKey>, Error> {
        let response = self
            .transport
            .send(Method::GET, &format!("users/{username}/keys"), None, None::<&()>)
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        response::json(response, &[StatusCode::OK]).await
    }

    /// List users following the given user.
    ///
    /// `GET /users/:username/followers` — 200; an unknown user yields an
    /// empty list.
    pub async fn list_followers(&self, username: &str) -> Result<Vec<User>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("users/{username}/followers"),
                None,
                None::<&()>,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        response::json(response, &[StatusCode::OK]).await
    }

    /// List users the given user follows.
    ///
    /// `GET /users/:username/following` — 200; an unknown user yields an
    /// empty list.
    pub async fn list_following(&self, username: &str) -> Result<Vec<User>, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("users/{username}/following"),
                None,
                None::<&()>,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        response::json(response, &[StatusCode::OK]).await
    }

    /// Check whether one user follows another.
    ///
    /// `GET /users/:username/following/:target` — 204 means yes, 404
    /// means no.
    pub async fn is_following(&self, username: &str, target: &str) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("users/{username}/following/{target}"),
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

    /// List followers of the signed-in user.
    ///
    /// `GET /user/followers` — 200.
    pub async fn current_followers(&self) -> Result<Vec<User>, Error> {
        let response = self
            .transport
            .send(Method::GET, "user/followers", None, None::<&()>)
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// List users the signed-in user follows.
    ///
    /// `GET /user/following` — 200.
    pub async fn current_following(&self) -> Result<Vec<User>, Error> {
        let response = self
            .transport
            .send(Method::GET, "user/following", None, None::<&()>)
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Check whether the signed-in user follows `target`.
    ///
    /// `GET /user/following/:target` — 204 means yes, 404 means no.
    pub async fn current_is_following(&self, target: &str) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::GET,
                &format!("user/following/{target}"),
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

    /// Follow a user. Idempotent.
    ///
    /// `PUT /user/following/:username` — 204; an unknown user yields
    /// `false`.
    pub async fn follow(&self, username: &str) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::PUT,
                &format!("user/following/{username}"),
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

    /// Unfollow a user. Idempotent.
    ///
    /// `DELETE /user/following/:username` — 204; an unknown user yields
    /// `false`.
    pub async fn unfollow(&self, username: &str) -> Result<bool, Error> {
        let response = self
            .transport
            .send(
                Method::DELETE,
                &format!("user/following/{username}"),
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

    /// List the signed-in user's registered email addresses.
    ///
    /// `GET /user/emails` — 200.
    pub async fn list_emails(&self) -> Result<Vec<Email>, Error> {
        let response = self
            .transport
            .send(Method::GET, "user/emails", None, None::<&()>)
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Add email addresses; the server echoes the added set.
    ///
    /// `POST /user/emails` — 201.
    pub async fn add_emails(&self, emails: &[String]) -> Result<Vec<Email>, Error> {
        let body = serde_json::json!({ "emails": emails });
        let response = self
            .transport
            .send(Method::POST, "user/emails", None, Some(&body))
            .await?;

        response::json(response, &[StatusCode::CREATED]).await
    }

    /// Delete email addresses.
    ///
    /// `DELETE /user/emails` — 204.
    pub async fn delete_emails(&self, emails: &[String]) -> Result<(), Error> {
        let body = serde_json::json!({ "emails": emails });
        let response = self
            .transport
            .send(Method::DELETE, "user/emails", None, Some(&body))
            .await?;

        response::unit(response, &[StatusCode::NO_CONTENT]).await
    }

    /// List the signed-in user's public keys.
    ///
    /// `GET /user/keys` — 200.
    pub async fn list_keys(&self) -> Result<Vec<PublicKey>, Error> {
        let response = self
            .transport
            .send(Method::GET, "user/keys", None, None::<&()>)
            .await?;

        response::json(response, &[StatusCode::OK]).await
    }

    /// Add a public key to the signed-in user.
    ///
    /// `POST /user/keys` — 201.
    pub async fn add_key(&self, title: &str, key: &str) -> Result<PublicKey, Error> {
        let body = serde_json::json!({ "title": title, "key": key });
        let response = self
            .transport
            .send(Method::POST, "user/keys", None, Some(&body))
            .await?;

        response::json(response, &[StatusCode::CREATED]).await
    }

    /// Get one of the signed-in user's public keys.
    ///
    /// `GET /user/keys/:id` — 200; 404 yields `None`.
    pub async fn get_key(&self, id: i64) -> Result<Option<PublicKey>, Error> {
        let response = self
            .transport
            .send(Method::GET, &format!("user/keys/{id}"), None, None::<&()>)
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response::json(response, &[StatusCode::OK]).await.map(Some)
    }

    /// Delete one of the signed-in user's public keys.
    ///
    /// `DELETE /user/keys/:id` — 204.
    pub async fn delete_key(&self, id: i64) -> Result<(), Error> {
        let response = self
            .transport
            .send(Method::DELETE, &format!("user/keys/{id}"), None, None::<&()>)
            .await?;

        response::unit(response, &[StatusCode::NO_CONTENT]).await
    }
}
