//! GitHub Actions integration.
//!
//! - Event context loading ([`GithubContext`])
//! - Workflow commands and failure reporting ([`FailureReporter`], [`ActionsReporter`])

mod commands;
mod context;

#[cfg(test)]
mod commands_tests;

pub use commands::{ActionsReporter, FailureReporter, escape_data, format_command};
pub use context::{Actor, ContextError, EventPayload, GithubContext, HeadRef, PullRequestEvent};
