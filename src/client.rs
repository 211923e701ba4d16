//! Main Gogs client.
//!
//! Aggregates the per-resource clients over one shared transport.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::{
    AdminClient, HooksClient, IssuesClient, MarkdownClient, OrgsClient, ReposClient,
    StatusesClient, UsersClient,
};
use crate::credential::Credential;
use crate::error::Error;
use crate::transport::Transport;

/// Client for a Gogs instance.
///
/// # Example
///
/// ```rust,ignore
/// use gogs_client::{Credential, GogsClient};
///
/// let client = GogsClient::new(
///     "https://try.gogs.io/api/v1",
///     Some(Credential::token("0123456789abcdef")),
///     None,
/// )?;
///
/// let me = client.users().current().await?;
/// let repo = client.repos().get(&me.username, "my-repo").await?;
/// ```
pub struct GogsClient {
    transport: Arc<Transport>,
    users: UsersClient,
    orgs: OrgsClient,
    repos: ReposClient,
    hooks: HooksClient,
    issues: IssuesClient,
    admin: AdminClient,
    statuses: StatusesClient,
    markdown: MarkdownClient,
}

impl GogsClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Versioned API root, e.g. `https://try.gogs.io/api/v1`
    /// * `credential` - Token and/or username/password; `None` for
    ///   anonymous access to public resources
    /// * `timeout` - Request timeout (default: 30 seconds)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(
        base_url: &str,
        credential: Option<Credential>,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        let transport = Arc::new(Transport::new(base_url, credential, timeout)?);

        Ok(Self {
            users: UsersClient::new(Arc::clone(&transport)),
            orgs: OrgsClient::new(Arc::clone(&transport)),
            repos: ReposClient::new(Arc::clone(&transport)),
            hooks: HooksClient::new(Arc::clone(&transport)),
            issues: IssuesClient::new(Arc::clone(&transport)),
            admin: AdminClient::new(Arc::clone(&transport)),
            statuses: StatusesClient::new(Arc::clone(&transport)),
            markdown: MarkdownClient::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `GOGS_BASE_URL` - Versioned API root (required)
    /// * `GOGS_TOKEN` - Access token (optional)
    /// * `GOGS_USERNAME` / `GOGS_PASSWORD` - Basic-auth pair (optional)
    ///
    /// When both a token and a username/password pair are set the
    /// credential carries both; requests prefer the token except on
    /// endpoints that only accept basic auth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `GOGS_BASE_URL` is not set.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = env::var("GOGS_BASE_URL").map_err(|_| {
            Error::Configuration("GOGS_BASE_URL environment variable not set".to_string())
        })?;

        let token = env::var("GOGS_TOKEN").ok();
        let username = env::var("GOGS_USERNAME").ok();
        let password = env::var("GOGS_PASSWORD").ok();

        let credential = match (token, username, password) {
            (Some(token), Some(username), Some(password)) => {
                Some(Credential::basic(username, password).with_token(token))
            }
            (Some(token), _, _) => Some(Credential::token(token)),
            (None, Some(username), Some(password)) => {
                Some(Credential::basic(username, password))
            }
            _ => None,
        };

        Self::new(&base_url, credential, None)
    }

    /// Get the underlying transport (for advanced use cases).
    #[must_use]
    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    /// Get the users client.
    #[must_use]
    pub fn users(&self) -> &UsersClient {
        &self.users
    }

    /// Get the organizations client.
    #[must_use]
    pub fn orgs(&self) -> &OrgsClient {
        &self.orgs
    }

    /// Get the repositories client.
    #[must_use]
    pub fn repos(&self) -> &ReposClient {
        &self.repos
    }

    /// Get the webhooks client.
    #[must_use]
    pub fn hooks(&self) -> &HooksClient {
        &self.hooks
    }

    /// Get the issues client.
    #[must_use]
    pub fn issues(&self) -> &IssuesClient {
        &self.issues
    }

    /// Get the admin client.
    #[must_use]
    pub fn admin(&self) -> &AdminClient {
        &self.admin
    }

    /// Get the build-status client.
    #[must_use]
    pub fn statuses(&self) -> &StatusesClient {
        &self.statuses
    }

    /// Get the markdown client.
    #[must_use]
    pub fn markdown(&self) -> &MarkdownClient {
        &self.markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GogsClient::new(
            "https://try.gogs.io/api/v1",
            Some(Credential::token("abc123")),
            None,
        )
        .expect("Client creation should succeed");

        assert_eq!(client.transport().base_url(), "https://try.gogs.io/api/v1");
    }

    #[test]
    fn test_client_anonymous() {
        let client = GogsClient::new("https://try.gogs.io/api/v1", None, None)
            .expect("Client creation should succeed");

        assert!(client.transport().credential().is_none());
    }

    #[test]
    fn test_client_with_custom_timeout() {
        let _client = GogsClient::new(
            "https://try.gogs.io/api/v1",
            Some(Credential::basic("user", "pass")),
            Some(Duration::from_secs(60)),
        )
        .expect("Client creation should succeed");
    }
}
