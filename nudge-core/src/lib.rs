//! Nudge Core - Core library for Nudge pull-request reminders
//!
//! This crate holds the decision logic of the reminder pipeline: which open
//! pull requests still need reviewer attention, and which Slack handles the
//! reminder should mention. Network I/O lives in the `nudge-bitbucket` and
//! `nudge-slack` crates.

pub mod approval;
pub mod config;
pub mod directory;
pub mod error;
pub mod reminder;
pub mod review;
pub mod secrets;
pub mod staleness;
pub mod title;

pub use config::Config;
pub use directory::IdentityDirectory;
pub use error::{Error, Result};
pub use reminder::{summarize, Reminder};
pub use review::{ReviewRequest, Reviewer};
pub use secrets::{Credentials, Secrets};
