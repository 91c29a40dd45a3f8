//! CLI argument parsing using clap.
//!
//! Every action input can also arrive through the environment variable the
//! GitHub Actions runner sets for it (`INPUT_<NAME>`, upper-cased with the
//! hyphens kept). Values stay strings here; blank values are treated as
//! absent during validation.

use std::path::PathBuf;

use clap::Parser;

/// deploy-notify: Preview Deployment Notifier
///
/// Announces a pull request's preview deployment to a Discord channel
/// through a webhook.
#[derive(Parser)]
#[command(name = "deploy-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Discord webhook URL
    #[arg(long = "webhook-url", env = "INPUT_DISCORD-WEBHOOK-URL", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// Deployment info as JSON: {"url": ..., "commitSha": ..., "commitMessage": ...}
    #[arg(long = "deployment-info", env = "INPUT_DEPLOYMENT-INFO")]
    pub deployment_info: Option<String>,

    /// GitHub token (optional)
    #[arg(long = "github-token", env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "INPUT_TIMEOUT")]
    pub timeout: Option<String>,

    /// Path to the event payload of the triggering workflow run
    #[arg(long = "event-path", env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Build and log the payload without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Runner debug flag, set to "1" when step debug logging is enabled
    #[arg(long = "runner-debug", env = "RUNNER_DEBUG", hide = true)]
    pub runner_debug: Option<String>,
}

impl std::fmt::Debug for Cli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cli")
            .field("webhook_url", &self.webhook_url.as_ref().map(|_| "***"))
            .field("deployment_info", &self.deployment_info)
            .field("github_token", &self.github_token.as_ref().map(|_| "***"))
            .field("timeout", &self.timeout)
            .field("event_path", &self.event_path)
            .field("config", &self.config)
            .field("dry_run", &self.dry_run)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
