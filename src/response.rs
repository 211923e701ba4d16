//! Response classification.
//!
//! Every facade call names the status code(s) its endpoint documents; a
//! response with any other status is read as text and surfaced as
//! [`Error::Api`] with the original status preserved. Endpoints that
//! downgrade 404 to a benign value check the status themselves before
//! calling into this module — the downgrade is per-endpoint policy, not
//! a blanket rule.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::Error;

/// Deserialize the body as JSON when the status matches.
///
/// # Errors
///
/// [`Error::Api`] on a status mismatch, [`Error::Http`] when the body
/// cannot be read or decoded.
pub async fn json<T: DeserializeOwned>(
    response: Response,
    expected: &[StatusCode],
) -> Result<T, Error> {
    let response = classify(response, expected).await?;
    response
        .json()
        .await
        .map_err(|e| Error::Http(format!("failed to decode response body: {e}")))
}

/// Read the body as text when the status matches (markdown rendering).
pub async fn text(response: Response, expected: &[StatusCode]) -> Result<String, Error> {
    let response = classify(response, expected).await?;
    response
        .text()
        .await
        .map_err(|e| Error::Http(format!("failed to read response body: {e}")))
}

/// Read the body as raw bytes when the status matches.
pub async fn bytes(response: Response, expected: &[StatusCode]) -> Result<Vec<u8>, Error> {
    let response = classify(response, expected).await?;
    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| Error::Http(format!("failed to read response body: {e}")))
}

/// Discard the body when the status matches (deletes and toggles).
pub async fn unit(response: Response, expected: &[StatusCode]) -> Result<(), Error> {
    classify(response, expected).await.map(|_| ())
}

async fn classify(response: Response, expected: &[StatusCode]) -> Result<Response, Error> {
    let status = response.status();
    if expected.contains(&status) {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), "unexpected status from gogs");
    Err(Error::Api {
        status: status.as_u16(),
        body,
    })
}
