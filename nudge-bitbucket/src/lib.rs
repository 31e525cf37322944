//! Nudge Bitbucket - Bitbucket Server integration for Nudge
//!
//! This crate provides read-only access to the Bitbucket Server REST 1.0
//! pull-request listing, converting the wire shapes into the domain types
//! the core pipeline works on.

mod client;
mod error;
mod model;

pub use client::BitbucketClient;
pub use error::{Error, Result};
pub use model::{PullRequest, PullRequestPage};
