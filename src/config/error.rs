//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Messages never include the webhook URL or the GitHub token.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required input.
    #[error("Missing required input: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing input
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// The `deployment-info` input is not a valid deployment document.
    #[error("Failed to parse deployment-info JSON: {0}")]
    MalformedDeploymentInfo(#[source] serde_json::Error),

    /// Invalid duration value.
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known input names for `MissingRequired` errors.
pub mod field {
    /// The deployment info input.
    pub const DEPLOYMENT_INFO: &str = "deployment-info";
    /// The request timeout input.
    pub const TIMEOUT: &str = "timeout";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required input.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
