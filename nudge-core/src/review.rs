//! Domain types for pull requests under review
//!
//! These are the host-agnostic shapes the pipeline works on; the
//! `nudge-bitbucket` crate converts its wire models into them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One assigned reviewer on a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    /// Reviewer email, the key into the identity directory
    pub email: String,
    /// Whether this reviewer has approved the pull request
    pub approved: bool,
}

impl Reviewer {
    /// Convenience constructor, mostly for tests
    pub fn new(email: impl Into<String>, approved: bool) -> Self {
        Self {
            email: email.into(),
            approved,
        }
    }
}

/// An open pull request as fetched from the review host
///
/// Never mutated; the pipeline only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Pull request number
    pub id: u64,
    /// Pull request title
    pub title: String,
    /// Author display name
    pub author: String,
    /// When the pull request was last updated
    pub updated_at: DateTime<Utc>,
    /// Assigned reviewers, in host order
    pub reviewers: Vec<Reviewer>,
}
