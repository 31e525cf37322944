//! Staleness gate: is a pull request's last update old enough to nag about?

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Check whether more than `threshold` has elapsed since `updated_at`
///
/// Strict inequality: a pull request updated exactly `threshold` ago is not
/// yet stale. Both instants are UTC, so local timezone never skews the
/// comparison.
pub fn is_stale(updated_at: DateTime<Utc>, now: DateTime<Utc>, threshold: Duration) -> bool {
    elapsed_seconds(updated_at, now) > threshold.as_secs() as i64
}

/// Whole seconds elapsed between `updated_at` and `now`
///
/// Negative when the host reports an update timestamp in the future.
pub fn elapsed_seconds(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - updated_at).num_seconds()
}
