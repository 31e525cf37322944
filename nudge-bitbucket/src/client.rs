//! Bitbucket Server API client using reqwest

use tracing::{debug, info};

use nudge_core::ReviewRequest;

use crate::model::PullRequestPage;
use crate::{Error, Result};

/// Bitbucket Server client for read-only pull-request queries
pub struct BitbucketClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl BitbucketClient {
    /// Create a new client for a Bitbucket Server instance
    ///
    /// `base_url` is the server root, e.g. `https://git.example.net`; the
    /// REST path is appended per request.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// List open pull requests for a repository, converted to domain types
    ///
    /// Fetches a single page; the run does not paginate. Requests are
    /// authenticated with basic auth and filtered server-side to open state.
    pub async fn list_open_pull_requests(&self, repo: &str) -> Result<Vec<ReviewRequest>> {
        let url = format!(
            "{}/rest/api/1.0/projects/{}/pull-requests",
            self.base_url, repo
        );
        debug!(%url, "Fetching open pull requests");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .query(&[("state", "OPEN")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api { status, url });
        }

        let page: PullRequestPage = response.json().await?;
        info!(
            repo,
            count = page.values.len(),
            "Fetched open pull requests"
        );

        Ok(page.values.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Debug for BitbucketClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitbucketClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
