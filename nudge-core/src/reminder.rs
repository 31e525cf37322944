//! Review summarizer: one pull request in, at most one reminder out
//!
//! The checks run in a fixed order with short-circuits: approval aggregation
//! first (an approved or reviewer-less pull request skips every other
//! check), then identity resolution, then the title filter, then the
//! staleness gate.

use chrono::{DateTime, Local, Utc};
use tracing::{debug, info};

use crate::config::Config;
use crate::directory::IdentityDirectory;
use crate::review::ReviewRequest;
use crate::{approval, staleness, title};

/// A qualifying pull request, resolved and ready to format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Author display name
    pub author: String,
    /// Web link to the pull request
    pub url: String,
    /// Last-update instant rendered for display, local time `YYYY-MM-DD HH:MM`
    pub last_updated: String,
    /// Pull request title
    pub title: String,
    /// Mention list, `<@handle>` joined with `, `; may be empty when no
    /// pending reviewer has a known handle
    pub reviewers: String,
}

/// Decide whether a pull request warrants a reminder, and build it if so
pub fn summarize(
    pull: &ReviewRequest,
    directory: &IdentityDirectory,
    config: &Config,
    now: DateTime<Utc>,
) -> Option<Reminder> {
    let pending = approval::pending_reviewers(&pull.reviewers)?;

    let handles: Vec<String> = pending
        .iter()
        .filter_map(|email| directory.resolve(email))
        .map(|handle| format!("@{}", handle))
        .collect();
    let unresolved = pending.len() - handles.len();
    if unresolved > 0 {
        debug!(
            pull = pull.id,
            unresolved, "Pending reviewers without a known Slack handle"
        );
    }

    if !title::is_title_allowed(&pull.title, &config.reminder.ignore_words) {
        info!(
            pull = pull.id,
            title = %pull.title,
            "Title matches an ignore word, skipping"
        );
        return None;
    }

    let elapsed = staleness::elapsed_seconds(pull.updated_at, now);
    if !staleness::is_stale(pull.updated_at, now, config.reminder.stale_after) {
        info!(pull = pull.id, elapsed, "Updated recently, skipping");
        return None;
    }
    info!(pull = pull.id, elapsed, "Last update is past the threshold");

    Some(Reminder {
        author: pull.author.clone(),
        url: format!(
            "{}/projects/{}/pull-requests/{}",
            config.bitbucket.base_url.trim_end_matches('/'),
            config.reminder.repo,
            pull.id
        ),
        last_updated: pull
            .updated_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        title: pull.title.clone(),
        reviewers: handles
            .iter()
            .map(|handle| format!("<{}>", handle))
            .collect::<Vec<_>>()
            .join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Reviewer;
    use chrono::{Duration, TimeZone};

    fn directory() -> IdentityDirectory {
        let csv = "email,slack\na@x.com,alice\nb@x.com,bob\n";
        IdentityDirectory::from_reader(csv.as_bytes()).unwrap()
    }

    fn config() -> Config {
        let mut config = Config::default();
        config.reminder.repo = "PLAT".to_string();
        config.bitbucket.base_url = "http://git.example.net".to_string();
        config
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn pull(title: &str, updated_ago: Duration, reviewers: Vec<Reviewer>) -> ReviewRequest {
        ReviewRequest {
            id: 42,
            title: title.to_string(),
            author: "carol".to_string(),
            updated_at: now() - updated_ago,
            reviewers,
        }
    }

    #[test]
    fn test_stale_unapproved_pull_produces_reminder() {
        let pull = pull(
            "Add feature",
            Duration::hours(6),
            vec![Reviewer::new("a@x.com", false)],
        );

        let reminder = summarize(&pull, &directory(), &config(), now()).unwrap();
        assert_eq!(reminder.reviewers, "<@alice>");
        assert_eq!(reminder.author, "carol");
        assert_eq!(reminder.title, "Add feature");
        assert_eq!(
            reminder.url,
            "http://git.example.net/projects/PLAT/pull-requests/42"
        );
        assert_eq!(
            reminder.last_updated,
            pull.updated_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        );
    }

    #[test]
    fn test_approved_pull_produces_nothing() {
        let pull = pull(
            "Add feature",
            Duration::hours(6),
            vec![
                Reviewer::new("a@x.com", false),
                Reviewer::new("b@x.com", true),
            ],
        );

        assert_eq!(summarize(&pull, &directory(), &config(), now()), None);
    }

    #[test]
    fn test_ignored_title_produces_nothing() {
        let mut config = config();
        config.reminder.ignore_words = vec!["draft".to_string()];
        let pull = pull(
            "DRAFT: new api",
            Duration::hours(6),
            vec![Reviewer::new("a@x.com", false)],
        );

        assert_eq!(summarize(&pull, &directory(), &config, now()), None);
    }

    #[test]
    fn test_fresh_pull_produces_nothing() {
        let pull = pull(
            "Add feature",
            Duration::minutes(1),
            vec![Reviewer::new("a@x.com", false)],
        );

        assert_eq!(summarize(&pull, &directory(), &config(), now()), None);
    }

    #[test]
    fn test_reviewerless_pull_skips_all_other_checks() {
        // Zero reviewers means "resolved", even for a stale ignorable title.
        let mut config = config();
        config.reminder.ignore_words = vec!["wip".to_string()];
        let pull = pull("WIP: orphan", Duration::days(30), vec![]);

        assert_eq!(summarize(&pull, &directory(), &config, now()), None);
    }

    #[test]
    fn test_unresolved_reviewers_are_dropped() {
        let pull = pull(
            "Add feature",
            Duration::hours(6),
            vec![
                Reviewer::new("a@x.com", false),
                Reviewer::new("stranger@elsewhere.com", false),
            ],
        );

        let reminder = summarize(&pull, &directory(), &config(), now()).unwrap();
        assert_eq!(reminder.reviewers, "<@alice>");
    }

    #[test]
    fn test_reminder_survives_zero_resolved_handles() {
        let pull = pull(
            "Add feature",
            Duration::hours(6),
            vec![Reviewer::new("stranger@elsewhere.com", false)],
        );

        let reminder = summarize(&pull, &directory(), &config(), now()).unwrap();
        assert_eq!(reminder.reviewers, "");
    }

    #[test]
    fn test_handle_order_follows_reviewer_order() {
        let pull = pull(
            "Add feature",
            Duration::hours(6),
            vec![
                Reviewer::new("b@x.com", false),
                Reviewer::new("a@x.com", false),
            ],
        );

        let reminder = summarize(&pull, &directory(), &config(), now()).unwrap();
        assert_eq!(reminder.reviewers, "<@bob>, <@alice>");
    }
}
