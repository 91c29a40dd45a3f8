//! Configuration layer for deploy-notify.
//!
//! This module provides:
//! - CLI argument parsing with action-input fallbacks ([`Cli`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Log-safe credentials ([`Secret`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **Action inputs** - `INPUT_*` variables set by the runner
//! 3. **TOML config file** - only `webhook.url`, `webhook.timeout`, `dry_run`
//! 4. **Built-in defaults**
//!
//! A blank value at any level counts as absent, because the runner sets
//! `INPUT_*` to an empty string for inputs the workflow leaves out.
//!
//! # Webhook URL and token
//!
//! Both are passed to the notifier as typed values. Nothing is written back
//! into the process environment.

mod cli;
pub mod defaults;
mod error;
mod secret;
mod toml;
mod validated;


pub use cli::Cli;
pub use error::{ConfigError, field};
pub use secret::Secret;
pub use self::toml::{TomlConfig, WebhookSection};
pub use validated::ValidatedConfig;
