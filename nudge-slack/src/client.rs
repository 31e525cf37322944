//! Slack webhook client using reqwest

use tracing::{debug, info};

use crate::message::Payload;
use crate::{Error, Result};

/// Client for a Slack incoming webhook
pub struct SlackClient {
    http: reqwest::Client,
    webhook_url: String,
}

impl SlackClient {
    /// Create a new client for a webhook URL
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
        }
    }

    /// Post one batched reminder payload
    ///
    /// A non-success status is a hard failure; there is no retry.
    pub async fn send(&self, payload: &Payload) -> Result<()> {
        debug!(
            channel = %payload.channel,
            attachments = payload.attachments.len(),
            "Posting reminder to Slack"
        );

        let response = self.http.post(&self.webhook_url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Delivery { status });
        }

        info!(channel = %payload.channel, "Reminder delivered");
        Ok(())
    }
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The webhook URL embeds a secret token, keep it out of logs
        f.debug_struct("SlackClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_webhook_url() {
        let client = SlackClient::new("https://hooks.slack.com/services/T000/B000/secret");
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("secret"));
    }
}
