//! Error types for the Gogs client.

use thiserror::Error;

/// Main error type for the Gogs client.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure: connection refused, DNS, malformed URI,
    /// or a body that could not be read.
    #[error("transport error: {0}")]
    Http(String),

    /// The service answered with a status code the endpoint does not
    /// document. Carries the observed status and the raw response body.
    #[error("gogs api error: status {status}: {body}")]
    Api { status: u16, body: String },

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing or inconsistent client configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Status code of a remote-API failure, if that is what this is.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the remote service rejected the call (as opposed to the
    /// call never reaching it).
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_preserves_status_and_body() {
        let error = Error::Api {
            status: 422,
            body: "{\"message\":\"name already taken\"}".to_string(),
        };

        assert_eq!(error.status(), Some(422));
        assert!(error.is_api());
        assert!(error.to_string().contains("422"));
        assert!(error.to_string().contains("name already taken"));
    }

    #[test]
    fn transport_error_has_no_status() {
        let error = Error::Http("connection refused".to_string());

        assert_eq!(error.status(), None);
        assert!(!error.is_api());
    }
}
