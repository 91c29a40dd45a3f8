//! Application execution logic.
//!
//! Wires the validated configuration, the event context and the production
//! HTTP client into one notification attempt.

use thiserror::Error;

use deploy_notify::config::ValidatedConfig;
use deploy_notify::github::{ActionsReporter, ContextError, FailureReporter, GithubContext};
use deploy_notify::notify::DiscordNotifier;
use deploy_notify::webhook::{HttpError, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for failures before the notifier runs.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to load the event payload.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// Failed to create the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),
}

/// Registers the configured credentials with the runner's log masking.
pub fn mask_secrets<W: std::io::Write>(config: &ValidatedConfig, reporter: &ActionsReporter<W>) {
    if let Some(url) = config.webhook_url() {
        reporter.add_mask(url);
    }
    if let Some(token) = &config.github_token {
        reporter.add_mask(token.expose());
        tracing::debug!("GitHub token provided");
    }
}

/// Runs one notification attempt.
///
/// Setup failures are reported through `reporter` the same way notification
/// failures are; nothing is returned.
pub async fn execute<R: FailureReporter + ?Sized>(config: &ValidatedConfig, reporter: &R) {
    if let Err(e) = notify(config, reporter).await {
        tracing::error!("{e}");
        reporter.set_failed(&format!("Action failed: {e}"));
    }
}

async fn notify<R: FailureReporter + ?Sized>(
    config: &ValidatedConfig,
    reporter: &R,
) -> Result<(), RunError> {
    let context = GithubContext::load(config.event_path.as_deref())?;
    let client = ReqwestClient::with_timeout(config.timeout).map_err(RunError::Client)?;

    if config.dry_run {
        tracing::info!("Dry-run mode enabled - the payload will be logged but not sent");
    }

    DiscordNotifier::new(client)
        .with_dry_run(config.dry_run)
        .notify(reporter, &context, &config.deployment, config.webhook_url())
        .await;

    Ok(())
}
