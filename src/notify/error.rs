//! Error type for a notification attempt.

use thiserror::Error;

use crate::webhook::WebhookError;

/// Prefix of every report for a failure past validation.
pub const SEND_FAILURE_PREFIX: &str = "Failed to send Discord notification";

/// Why a notification was not delivered.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The triggering event carries no pull request.
    #[error("No PR found in context")]
    MissingPullRequest,

    /// No webhook URL was configured.
    #[error("Discord webhook URL is not provided")]
    MissingWebhookUrl,

    /// The webhook URL does not parse. Only the parser's reason is kept.
    #[error("Invalid webhook URL: {0}")]
    InvalidWebhookUrl(#[source] url::ParseError),

    /// Delivery failed.
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

impl NotifyError {
    /// Returns the message handed to the failure reporter.
    ///
    /// Validation failures are reported verbatim. Anything later is prefixed
    /// with [`SEND_FAILURE_PREFIX`] and never includes a rejection body.
    #[must_use]
    pub fn report_message(&self) -> String {
        match self {
            Self::MissingPullRequest | Self::MissingWebhookUrl => self.to_string(),
            Self::InvalidWebhookUrl(_) => format!("{SEND_FAILURE_PREFIX}: {self}"),
            Self::Webhook(e) => format!("{SEND_FAILURE_PREFIX}: {}", e.public_message()),
        }
    }
}
