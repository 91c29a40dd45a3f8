//! Inputs to a notification: the pull request and the deployment.

use serde::{Deserialize, Serialize};

use crate::github::PullRequestEvent;

/// Pull request details shown in the embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestInfo {
    /// Pull request number
    pub number: u64,
    /// Pull request title
    pub title: String,
    /// Browser URL of the pull request
    pub url: String,
    /// Login of the author
    pub author: String,
    /// Avatar image of the author
    pub author_avatar_url: String,
    /// Source branch name
    pub branch_name: String,
}

impl From<&PullRequestEvent> for PullRequestInfo {
    fn from(pr: &PullRequestEvent) -> Self {
        Self {
            number: pr.number,
            title: pr.title.clone(),
            url: pr.html_url.clone(),
            author: pr.user.login.clone(),
            author_avatar_url: pr.user.avatar_url.clone(),
            branch_name: pr.head.ref_name.clone(),
        }
    }
}

/// Where the preview was deployed, as supplied by the `deployment-info` input.
///
/// Keys are camelCase in JSON. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentInfo {
    /// Preview deployment URL
    pub url: String,
    /// Commit the preview was built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_sha: Option<String>,
    /// Message of that commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
}

impl DeploymentInfo {
    /// Creates deployment info without commit details.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            commit_sha: None,
            commit_message: None,
        }
    }

    /// Adds commit details.
    #[must_use]
    pub fn with_commit(mut self, sha: impl Into<String>, message: impl Into<String>) -> Self {
        self.commit_sha = Some(sha.into());
        self.commit_message = Some(message.into());
        self
    }

    /// Parses the `deployment-info` JSON document.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if `json` is not an object with a string `url`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns `(sha, message)` when both are present and non-empty.
    ///
    /// A commit with only one of the two is treated as absent.
    #[must_use]
    pub fn commit(&self) -> Option<(&str, &str)> {
        let sha = self.commit_sha.as_deref().filter(|s| !s.is_empty())?;
        let message = self.commit_message.as_deref().filter(|s| !s.is_empty())?;
        Some((sha, message))
    }
}
