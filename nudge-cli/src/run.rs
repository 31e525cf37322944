//! Run controller: fetch, summarize, deliver
//!
//! Pull requests are processed strictly in the order the host returns them;
//! one batched message goes out only if at least one of them qualifies.

use chrono::Utc;
use tracing::info;

use nudge_bitbucket::BitbucketClient;
use nudge_core::{summarize, Config, Credentials, IdentityDirectory, Reminder};
use nudge_slack::{Attachment, Payload, SlackClient};

/// Execute one reminder run
pub async fn run(config: &Config, credentials: &Credentials) -> anyhow::Result<()> {
    let bitbucket = BitbucketClient::new(
        &config.bitbucket.base_url,
        &credentials.bitbucket_username,
        &credentials.bitbucket_password,
    );

    let pulls = bitbucket
        .list_open_pull_requests(&config.reminder.repo)
        .await?;
    if pulls.is_empty() {
        info!(repo = %config.reminder.repo, "No open pull requests, nothing to do");
        return Ok(());
    }

    // Load the identity directory once and pass it down
    let directory = IdentityDirectory::from_csv_path(&config.reminder.people_file)?;

    let now = Utc::now();
    let reminders: Vec<Reminder> = pulls
        .iter()
        .filter_map(|pull| summarize(pull, &directory, config, now))
        .collect();

    if reminders.is_empty() {
        info!("Every open pull request is approved, ignored or fresh");
        return Ok(());
    }

    let attachments: Vec<Attachment> = reminders.iter().map(Attachment::from).collect();
    info!(count = attachments.len(), "Posting reminder");

    let slack = SlackClient::new(&credentials.slack_webhook_url);
    slack
        .send(&Payload::new(&config.reminder.channel, attachments))
        .await?;

    Ok(())
}
