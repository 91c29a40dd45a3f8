//! deploy-notify: Preview Deployment Notifier
//!
//! A library for announcing pull-request preview deployments to a Discord
//! channel from a GitHub Actions step.

pub mod config;
pub mod github;
pub mod notify;
pub mod time;
pub mod webhook;
