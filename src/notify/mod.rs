//! Preview-deployment notifications.
//!
//! - Notification inputs ([`PullRequestInfo`], [`DeploymentInfo`])
//! - Embed construction ([`build_embed`], [`NotificationEmbed`])
//! - The send-and-report flow ([`DiscordNotifier`])

pub mod embed;
mod error;
mod info;
mod notifier;

#[cfg(test)]
mod notifier_tests;

pub use embed::{
    EmbedAuthor, EmbedField, EmbedFooter, NotificationEmbed, build_embed, build_embed_at,
};
pub use error::{NotifyError, SEND_FAILURE_PREFIX};
pub use info::{DeploymentInfo, PullRequestInfo};
pub use notifier::DiscordNotifier;
