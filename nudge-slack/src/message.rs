//! Message shapes for the Slack incoming webhook

use serde::{Deserialize, Serialize};

use nudge_core::Reminder;

/// Display name the reminder is posted under
pub const USERNAME: &str = "Pull Request Reminder";

/// Icon shown next to the reminder
pub const ICON_EMOJI: &str = ":bell:";

/// Introductory text above the attachment list
pub const INTRO_TEXT: &str = "Hi! There's a few open pull requests waiting for your review.\n\
                              You should take a look at:";

/// One pull request rendered as a Slack attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Reviewers, author and last-updated block
    pub text: String,
    /// Pull request title
    pub title: String,
    /// Link target for the title
    pub title_link: String,
}

impl From<&Reminder> for Attachment {
    fn from(reminder: &Reminder) -> Self {
        Self {
            text: format!(
                "Reviewers: {}\n Author: {}\nLastUpdated: {}",
                reminder.reviewers, reminder.author, reminder.last_updated
            ),
            title: reminder.title.clone(),
            title_link: reminder.url.clone(),
        }
    }
}

/// The full webhook payload: one batched message for all attachments
#[derive(Debug, Clone, Serialize)]
pub struct Payload {
    /// Target channel
    pub channel: String,
    /// Display username
    pub username: String,
    /// Icon indicator
    pub icon_emoji: String,
    /// Introductory text block
    pub text: String,
    /// One attachment per qualifying pull request, in fetch order
    pub attachments: Vec<Attachment>,
}

impl Payload {
    /// Build the reminder payload for a channel
    pub fn new(channel: impl Into<String>, attachments: Vec<Attachment>) -> Self {
        Self {
            channel: channel.into(),
            username: USERNAME.to_string(),
            icon_emoji: ICON_EMOJI.to_string(),
            text: INTRO_TEXT.to_string(),
            attachments,
        }
    }
}
