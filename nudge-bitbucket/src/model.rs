//! Wire models for the Bitbucket Server REST 1.0 pull-request listing
//!
//! Deserialization is tolerant: optional fields default rather than failing
//! the whole page, since a reminder run should survive sparse records.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use nudge_core::{ReviewRequest, Reviewer};

/// One page of pull requests as returned by
/// `/rest/api/1.0/projects/{repo}/pull-requests`
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPage {
    /// Number of pull requests in this page
    #[serde(default)]
    pub size: u64,
    /// The pull requests themselves
    #[serde(default)]
    pub values: Vec<PullRequest>,
}

/// A pull request as it appears on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    /// Pull request number
    pub id: u64,
    /// Title
    #[serde(default)]
    pub title: String,
    /// Author participant
    #[serde(default)]
    pub author: Participant,
    /// Last update, epoch milliseconds
    #[serde(default)]
    pub updated_date: i64,
    /// Assigned reviewers
    #[serde(default)]
    pub reviewers: Vec<ReviewerEntry>,
}

/// A participant wrapper around a user record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Participant {
    /// The wrapped user
    #[serde(default)]
    pub user: User,
}

/// A Bitbucket user
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email address
    #[serde(default)]
    pub email_address: String,
}

/// A reviewer entry on a pull request
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewerEntry {
    /// The reviewing user
    #[serde(default)]
    pub user: User,
    /// Whether this reviewer has approved
    #[serde(default)]
    pub approved: bool,
}

impl From<PullRequest> for ReviewRequest {
    fn from(pull: PullRequest) -> Self {
        ReviewRequest {
            id: pull.id,
            title: pull.title,
            author: pull.author.user.name,
            updated_at: DateTime::<Utc>::from_timestamp_millis(pull.updated_date)
                .unwrap_or_else(Utc::now),
            reviewers: pull
                .reviewers
                .into_iter()
                .map(|entry| Reviewer {
                    email: entry.user.email_address,
                    approved: entry.approved,
                })
                .collect(),
        }
    }
}
