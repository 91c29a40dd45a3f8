//! Error types for HTTP and webhook operations.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// None of the variants carry the request URL: webhook URLs embed their
/// access token, so these messages are safe to surface in CI logs.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the provided URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for a single webhook delivery.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request never produced a response.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The endpoint answered with a non-2xx status.
    #[error("Discord webhook failed ({}): {body}", status.as_u16())]
    Rejected {
        /// HTTP status code returned
        status: http::StatusCode,
        /// Response body text
        body: String,
    },

    /// The payload could not be encoded as JSON.
    #[error("Failed to encode webhook payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl WebhookError {
    /// Returns a message suitable for the user-visible failure report.
    ///
    /// Unlike [`Display`](std::fmt::Display), a rejection is reduced to its
    /// status code so the response body stays out of the report.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Rejected { status, .. } => {
                format!("Discord webhook failed ({})", status.as_u16())
            }
            other => other.to_string(),
        }
    }
}
