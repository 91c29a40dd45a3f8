//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::notify::DeploymentInfo;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::secret::Secret;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Discord webhook URL.
    ///
    /// Absence is not a configuration error: the notifier reports it.
    pub webhook_url: Option<Secret>,

    /// Deployment to announce (required)
    pub deployment: DeploymentInfo,

    /// GitHub token, only masked in the log
    pub github_token: Option<Secret>,

    /// Event payload file of the triggering run
    pub event_path: Option<PathBuf>,

    /// Timeout for the webhook request
    pub timeout: Duration,

    /// Dry-run mode (log the payload without sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event_path = self
            .event_path
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ webhook_url: {}, github_token: {}, event_path: {}, timeout: {}s, dry_run: {} }}",
            if self.webhook_url.is_some() { "set" } else { "missing" },
            if self.github_token.is_some() { "set" } else { "none" },
            event_path,
            self.timeout.as_secs(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments (and their environment fallbacks) take precedence over
    /// TOML config values. Blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `deployment-info` is missing or is not valid JSON
    /// - The timeout is not a positive number of seconds
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let deployment = Self::resolve_deployment(cli)?;

        let webhook_url = non_blank(cli.webhook_url.as_deref())
            .or_else(|| toml.and_then(|t| non_blank(t.webhook.url.as_deref())))
            .map(Secret::new);

        let github_token = non_blank(cli.github_token.as_deref()).map(Secret::new);

        let event_path = non_blank(cli.event_path.as_deref()).map(PathBuf::from);

        let timeout = Self::resolve_timeout(cli, toml)?;

        Ok(Self {
            webhook_url,
            deployment,
            github_token,
            event_path,
            timeout,
            dry_run: cli.dry_run || toml.is_some_and(|t| t.dry_run),
            verbose: cli.verbose || cli.runner_debug.as_deref() == Some("1"),
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Returns the webhook URL for the single place it is used.
    #[must_use]
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_ref().map(Secret::expose)
    }

    fn resolve_deployment(cli: &Cli) -> Result<DeploymentInfo, ConfigError> {
        let json = non_blank(cli.deployment_info.as_deref()).ok_or_else(|| {
            ConfigError::missing(
                field::DEPLOYMENT_INFO,
                "Set the deployment-info input or use --deployment-info",
            )
        })?;

        DeploymentInfo::from_json(json).map_err(ConfigError::MalformedDeploymentInfo)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = match non_blank(cli.timeout.as_deref()) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidDuration {
                    field: field::TIMEOUT,
                    reason: format!("'{raw}' is not a number of seconds: {e}"),
                })?,
            None => toml
                .and_then(|t| t.webhook.timeout)
                .unwrap_or(defaults::TIMEOUT_SECS),
        };

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT,
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
