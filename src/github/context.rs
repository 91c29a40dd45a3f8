//! Typed view of the GitHub Actions event that triggered the run.
//!
//! The runner writes the webhook event as JSON to the file named by
//! `GITHUB_EVENT_PATH`. Only the parts of a `pull_request` event that the
//! notification needs are modelled; everything else is ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Error loading the event payload.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The event file exists but could not be read.
    #[error("Failed to read event payload '{}': {source}", path.display())]
    Read {
        /// Path to the event file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The event file is not valid JSON or has an unexpected shape.
    #[error("Failed to parse event payload '{}': {source}", path.display())]
    Parse {
        /// Path to the event file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// The workflow run context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GithubContext {
    /// The triggering event payload.
    pub payload: EventPayload,
}

/// Webhook event payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventPayload {
    /// Present for `pull_request` and `pull_request_target` events.
    #[serde(default)]
    pub pull_request: Option<PullRequestEvent>,
}

/// The `pull_request` object of an event payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestEvent {
    /// Pull request number
    pub number: u64,
    /// Pull request title
    pub title: String,
    /// Browser URL of the pull request
    pub html_url: String,
    /// Author of the pull request
    pub user: Actor,
    /// Source branch of the pull request
    pub head: HeadRef,
}

/// A GitHub account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Actor {
    /// Account name
    pub login: String,
    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: String,
}

/// A branch reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeadRef {
    /// Branch name (without `refs/heads/`)
    #[serde(rename = "ref")]
    pub ref_name: String,
}

impl GithubContext {
    /// Creates a context around an already-parsed payload.
    #[must_use]
    pub const fn new(payload: EventPayload) -> Self {
        Self { payload }
    }

    /// Loads the context from the event file at `path`.
    ///
    /// A missing path, or a path that does not exist, yields an empty
    /// payload: the run was not triggered by an event that carries one.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError`] if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ContextError> {
        let Some(path) = path else {
            tracing::debug!("No event payload path provided");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!("Event payload '{}' does not exist", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ContextError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content).map_err(|e| ContextError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parses an event payload from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if `json` is not a valid event payload.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    /// Returns the pull request this run is about, if any.
    #[must_use]
    pub const fn pull_request(&self) -> Option<&PullRequestEvent> {
        self.payload.pull_request.as_ref()
    }
}
