//! HTTP transport for the Gogs client.
//!
//! Holds the base URL, the optional credential and the shared
//! `reqwest::Client`, and performs one HTTP call per invocation. No
//! retries: a failure to reach the service surfaces immediately as
//! [`Error::Http`].

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use tracing::debug;

use crate::credential::Credential;
use crate::error::Error;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Query parameters as borrowed key / owned value pairs.
pub type Query<'a> = [(&'a str, String)];

/// Transport handle shared by all resource clients.
///
/// Read-only after construction, so callers may issue concurrent requests
/// from multiple tasks without locking.
pub struct Transport {
    base_url: String,
    credential: Option<Credential>,
    http: Client,
}

impl Transport {
    /// Create a new transport.
    ///
    /// `base_url` must point at the versioned API root of the instance,
    /// e.g. `https://try.gogs.io/api/v1`. A trailing slash is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        credential: Option<Credential>,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
            http,
        })
    }

    /// Perform an HTTP call against `base_url/path` with the default
    /// authorization header: token form when the credential carries a
    /// token, basic form otherwise, none when unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] when the request never produced a response.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query<'_>>,
        body: Option<&impl Serialize>,
    ) -> Result<Response, Error> {
        let auth = self.credential.as_ref().and_then(Credential::header_value);
        self.dispatch(method, path, query, body, auth).await
    }

    /// Perform an HTTP call that Gogs serves exclusively under basic auth
    /// (token management endpoints).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the credential holds no
    /// username/password pair.
    pub async fn send_basic(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<Response, Error> {
        let auth = self
            .credential
            .as_ref()
            .and_then(Credential::basic_header_value)
            .ok_or_else(|| {
                Error::Configuration("endpoint requires a username/password credential".to_string())
            })?;
        self.dispatch(method, path, None, body, Some(auth)).await
    }

    /// Perform an HTTP call with a plain-text body (markdown rendering).
    pub async fn send_text(
        &self,
        method: Method,
        path: &str,
        body: String,
    ) -> Result<Response, Error> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url).body(body);
        if let Some(auth) = self.credential.as_ref().and_then(Credential::header_value) {
            request = request.header(AUTHORIZATION, auth);
        }

        debug!(%method, %url, "dispatching request");
        request.send().await.map_err(|e| Error::Http(e.to_string()))
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query<'_>>,
        body: Option<&impl Serialize>,
        auth: Option<String>,
    ) -> Result<Response, Error> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);

        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(auth) = auth {
            request = request.header(AUTHORIZATION, auth);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, "dispatching request");
        let response = request.send().await.map_err(|e| Error::Http(e.to_string()))?;
        debug!(status = %response.status(), %url, "response received");

        Ok(response)
    }

    /// Base URL of the target instance, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential this transport was built with.
    #[must_use]
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let transport =
            Transport::new("http://gogs.local/api/v1/", None, None).expect("transport");

        assert_eq!(transport.base_url(), "http://gogs.local/api/v1");
    }

    #[test]
    fn credential_is_retained() {
        let transport = Transport::new(
            "http://gogs.local/api/v1",
            Some(Credential::token("abc")),
            None,
        )
        .expect("transport");

        assert!(transport.credential().is_some_and(Credential::has_token));
    }

    #[tokio::test]
    async fn basic_only_endpoint_rejects_missing_credential() {
        let transport =
            Transport::new("http://gogs.local/api/v1", Some(Credential::token("abc")), None)
                .expect("transport");

        let result = transport
            .send_basic(Method::GET, "users/me/tokens", None::<&()>)
            .await;

        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
