//! Authentication material for a Gogs instance.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Credential used to build authorization headers.
///
/// Gogs accepts two schemes: an access token (`token <sha1>`) for most
/// endpoints, and basic auth for account-level operations such as token
/// management. A credential may carry either or both.
///
/// # Example
///
/// ```rust
/// use gogs_client::Credential;
///
/// let token_only = Credential::token("5a855f3b");
/// let basic = Credential::basic("gogs-admin", "pass");
/// let both = Credential::basic("gogs-admin", "pass").with_token("5a855f3b");
/// assert!(both.has_token());
/// assert!(both.has_basic());
/// # let _ = (token_only, basic);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Credential {
    token: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl Credential {
    /// Create a token-only credential.
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            username: None,
            password: None,
        }
    }

    /// Create a username/password credential.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            token: None,
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Attach a token to an existing credential.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn has_basic(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Default authorization value: token form when a token exists,
    /// basic form otherwise.
    pub(crate) fn header_value(&self) -> Option<String> {
        match &self.token {
            Some(token) => Some(format!("token {token}")),
            None => self.basic_header_value(),
        }
    }

    /// Basic-auth authorization value, regardless of any token present.
    pub(crate) fn basic_header_value(&self) -> Option<String> {
        let (username, password) = (self.username.as_ref()?, self.password.as_ref()?);
        let encoded = STANDARD.encode(format!("{username}:{password}"));
        Some(format!("Basic {encoded}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_credential_uses_token_scheme() {
        let credential = Credential::token("abc123");

        assert_eq!(credential.header_value().as_deref(), Some("token abc123"));
        assert_eq!(credential.basic_header_value(), None);
    }

    #[test]
    fn basic_credential_encodes_user_and_password() {
        let credential = Credential::basic("gogs-user", "pass");

        // base64("gogs-user:pass")
        assert_eq!(
            credential.header_value().as_deref(),
            Some("Basic Z29ncy11c2VyOnBhc3M=")
        );
    }

    #[test]
    fn token_takes_precedence_over_basic() {
        let credential = Credential::basic("gogs-user", "pass").with_token("abc123");

        assert_eq!(credential.header_value().as_deref(), Some("token abc123"));
        assert_eq!(
            credential.basic_header_value().as_deref(),
            Some("Basic Z29ncy11c2VyOnBhc3M=")
        );
    }

    #[test]
    fn empty_credential_produces_no_header() {
        let credential = Credential::default();

        assert_eq!(credential.header_value(), None);
        assert!(!credential.has_token());
        assert!(!credential.has_basic());
    }
}
