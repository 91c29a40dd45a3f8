//! The notification flow: validate, build, send, report.

use crate::github::{FailureReporter, GithubContext};
use crate::time::{Clock, SystemClock};
use crate::webhook::{DiscordWebhook, HttpClient, WebhookPayload};

use super::{DeploymentInfo, NotifyError, PullRequestInfo, build_embed};

/// Sends one preview-deployment notification per call.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `C`: The clock stamping the embed (defaults to [`SystemClock`])
///
/// # Example
///
/// ```
/// use deploy_notify::notify::DiscordNotifier;
/// use deploy_notify::webhook::ReqwestClient;
///
/// let notifier = DiscordNotifier::new(ReqwestClient::new()).with_dry_run(true);
/// assert!(notifier.is_dry_run());
/// ```
#[derive(Debug)]
pub struct DiscordNotifier<H, C = SystemClock> {
    client: H,
    clock: C,
    dry_run: bool,
}

impl<H> DiscordNotifier<H, SystemClock> {
    /// Creates a notifier using the system clock.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self {
            client,
            clock: SystemClock,
            dry_run: false,
        }
    }
}

impl<H, C> DiscordNotifier<H, C> {
    /// Replaces the clock used for embed timestamps.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> DiscordNotifier<H, C2> {
        DiscordNotifier {
            client: self.client,
            clock,
            dry_run: self.dry_run,
        }
    }

    /// Logs the payload instead of posting it.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Returns true if payloads are logged rather than sent.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl<H: HttpClient, C: Clock> DiscordNotifier<H, C> {
    /// Attempts one notification and reports the outcome.
    ///
    /// Every failure goes to `reporter` as a short message; nothing is
    /// returned. The webhook URL is never logged or reported.
    pub async fn notify<R: FailureReporter + ?Sized>(
        &self,
        reporter: &R,
        context: &GithubContext,
        deployment: &DeploymentInfo,
        webhook_url: Option<&str>,
    ) {
        tracing::info!("Sending Discord notification...");

        match self.try_notify(context, deployment, webhook_url).await {
            Ok(()) if self.dry_run => {
                tracing::info!("Dry run complete, nothing was sent");
            }
            Ok(()) => tracing::info!("Discord notification sent successfully"),
            Err(e) => {
                tracing::error!("Error sending Discord notification: {e}");
                reporter.set_failed(&e.report_message());
            }
        }
    }

    /// Runs the flow, stopping at the first error.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::MissingPullRequest`] if `context` has no pull request
    /// - [`NotifyError::MissingWebhookUrl`] if `webhook_url` is absent or blank
    /// - [`NotifyError::InvalidWebhookUrl`] if it does not parse
    /// - [`NotifyError::Webhook`] if delivery fails
    pub async fn try_notify(
        &self,
        context: &GithubContext,
        deployment: &DeploymentInfo,
        webhook_url: Option<&str>,
    ) -> Result<(), NotifyError> {
        let pr = context
            .pull_request()
            .ok_or(NotifyError::MissingPullRequest)?;
        let pr_info = PullRequestInfo::from(pr);

        log_json("PR Info", &pr_info);
        log_json("Deployment Info", deployment);

        let webhook_url = webhook_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(NotifyError::MissingWebhookUrl)?;
        let url = url::Url::parse(webhook_url).map_err(NotifyError::InvalidWebhookUrl)?;

        let embed = build_embed(&pr_info, deployment, &self.clock);

        if self.dry_run {
            log_json("Payload (dry run)", &WebhookPayload::new(&embed));
            return Ok(());
        }

        DiscordWebhook::new(&self.client, url).send(&embed).await?;
        Ok(())
    }
}

fn log_json<T: serde::Serialize + ?Sized>(label: &str, value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => tracing::info!("{label}: {json}"),
        Err(e) => tracing::debug!("{label}: <unserializable: {e}>"),
    }
}
