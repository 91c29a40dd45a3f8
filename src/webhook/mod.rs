//! Webhook layer for sending HTTP requests to Discord.
//!
//! This module provides:
//! - HTTP request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The client abstraction ([`HttpClient`]) and its reqwest implementation ([`ReqwestClient`])
//! - Discord delivery of a single embed ([`DiscordWebhook`])

mod client;
mod error;
mod request;
mod sender;


pub use client::ReqwestClient;
pub use error::{HttpError, WebhookError};
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{DiscordWebhook, WebhookPayload};
