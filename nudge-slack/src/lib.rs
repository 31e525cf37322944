//! Nudge Slack - Slack webhook delivery for Nudge
//!
//! This crate turns reminder records into the attachment shape Slack
//! expects and posts the batched payload to an incoming webhook.

mod client;
mod error;
mod message;

pub use client::SlackClient;
pub use error::{Error, Result};
pub use message::{Attachment, Payload};
