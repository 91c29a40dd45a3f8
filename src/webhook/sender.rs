//! Discord webhook delivery.

use serde::Serialize;

use crate::notify::NotificationEmbed;

use super::{HttpClient, HttpRequest, WebhookError};

/// Body of a Discord webhook execution carrying embeds only.
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    /// Embeds to post, in display order.
    pub embeds: [&'a NotificationEmbed; 1],
}

impl<'a> WebhookPayload<'a> {
    /// Wraps a single embed.
    #[must_use]
    pub const fn new(embed: &'a NotificationEmbed) -> Self {
        Self { embeds: [embed] }
    }
}

/// A Discord webhook endpoint reached through an [`HttpClient`].
///
/// Each call to [`DiscordWebhook::send`] issues exactly one POST. There is
/// no retry: a failed delivery is reported to the caller as-is.
///
/// The `Debug` output omits the URL.
pub struct DiscordWebhook<'c, H> {
    client: &'c H,
    url: url::Url,
}

impl<H> std::fmt::Debug for DiscordWebhook<'_, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordWebhook")
            .field("host", &self.url.host_str())
            .finish_non_exhaustive()
    }
}

impl<'c, H: HttpClient> DiscordWebhook<'c, H> {
    /// Creates a webhook that posts to `url` using `client`.
    #[must_use]
    pub const fn new(client: &'c H, url: url::Url) -> Self {
        Self { client, url }
    }

    /// Builds the request that [`send`](Self::send) would issue.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Serialize`] if the embed cannot be encoded.
    pub fn build_request(&self, embed: &NotificationEmbed) -> Result<HttpRequest, WebhookError> {
        Ok(HttpRequest::post_json(
            self.url.clone(),
            &WebhookPayload::new(embed),
        )?)
    }

    /// Posts `embed` to the webhook.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::Http`] if no response was received
    /// - [`WebhookError::Rejected`] if the status is not 2xx; the response
    ///   body is kept in the error
    /// - [`WebhookError::Serialize`] if the payload cannot be encoded
    pub async fn send(&self, embed: &NotificationEmbed) -> Result<(), WebhookError> {
        let request = self.build_request(embed)?;
        let response = self.client.request(request).await?;

        if response.is_success() {
            tracing::debug!(status = %response.status, "Webhook accepted payload");
            return Ok(());
        }

        Err(WebhookError::Rejected {
            status: response.status,
            body: response.body_text().into_owned(),
        })
    }
}
