//! Discord embed construction.

use std::time::SystemTime;

use serde::Serialize;

use crate::time::{Clock, to_iso8601};

use super::{DeploymentInfo, PullRequestInfo};

/// Embed title.
pub const TITLE: &str = "🚀 Preview Deployment Ready";

/// Embed accent color.
pub const COLOR: u32 = 0x00d4aa;

/// Footer text.
pub const FOOTER_TEXT: &str = "Vercel Preview Deployment";

/// Footer icon.
pub const FOOTER_ICON_URL: &str = "https://vercel.com/favicon.ico";

/// Field names, in the order they appear.
pub mod field {
    /// Pull request link.
    pub const PULL_REQUEST: &str = "📋 Pull Request";
    /// Source branch.
    pub const BRANCH: &str = "🌿 Branch";
    /// Author mention.
    pub const AUTHOR: &str = "👤 Author";
    /// Latest commit, only when both sha and message are known.
    pub const COMMIT: &str = "📝 Latest Commit";
    /// Deployment link, always last.
    pub const PREVIEW_LINK: &str = "🔗 Preview Link";
}

/// A Discord embed announcing a preview deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationEmbed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub author: EmbedAuthor,
    /// ISO-8601 time the embed was built.
    pub timestamp: String,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn new(name: &str, value: String, inline: bool) -> Self {
        Self {
            name: name.to_string(),
            value,
            inline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: String,
}

impl NotificationEmbed {
    /// Returns the field with the given name, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&EmbedField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Builds the embed, stamping it with the clock's current time.
#[must_use]
pub fn build_embed<C: Clock + ?Sized>(
    pr: &PullRequestInfo,
    deployment: &DeploymentInfo,
    clock: &C,
) -> NotificationEmbed {
    build_embed_at(pr, deployment, clock.now())
}

/// Builds the embed with an explicit timestamp.
///
/// Field order is fixed: pull request, branch and author (inline), then the
/// latest commit when [`DeploymentInfo::commit`] yields one, then the
/// preview link.
#[must_use]
pub fn build_embed_at(
    pr: &PullRequestInfo,
    deployment: &DeploymentInfo,
    at: SystemTime,
) -> NotificationEmbed {
    let mut fields = vec![
        EmbedField::new(
            field::PULL_REQUEST,
            format!("[#{}]({})", pr.number, pr.url),
            true,
        ),
        EmbedField::new(field::BRANCH, format!("`{}`", pr.branch_name), true),
        EmbedField::new(field::AUTHOR, format!("@{}", pr.author), true),
    ];

    if let Some((sha, message)) = deployment.commit() {
        fields.push(EmbedField::new(
            field::COMMIT,
            format!("`{sha}` {message}"),
            false,
        ));
    }

    fields.push(EmbedField::new(
        field::PREVIEW_LINK,
        format!("[View Deployment]({})", deployment.url),
        false,
    ));

    NotificationEmbed {
        title: TITLE.to_string(),
        description: format!("**{}**", pr.title),
        color: COLOR,
        fields,
        author: EmbedAuthor {
            name: pr.author.clone(),
            icon_url: pr.author_avatar_url.clone(),
        },
        timestamp: to_iso8601(at),
        footer: EmbedFooter {
            text: FOOTER_TEXT.to_string(),
            icon_url: FOOTER_ICON_URL.to_string(),
        },
    }
}
