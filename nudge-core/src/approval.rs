//! Approval aggregation for a pull request's reviewer list
//!
//! The policy here is deliberately isolated behind one function so it can be
//! swapped without touching callers: a single approval from anyone marks the
//! whole pull request as resolved, even if other reviewers have not acted.

use crate::review::Reviewer;

/// Return the emails of reviewers still expected to act, in host order
///
/// Returns `None` when the pull request needs no reminder: either the
/// reviewer list is empty, or at least one reviewer has already approved.
/// Otherwise returns every reviewer email (none of them have approved).
pub fn pending_reviewers(reviewers: &[Reviewer]) -> Option<Vec<&str>> {
    if reviewers.is_empty() {
        return None;
    }

    let mut pending = Vec::with_capacity(reviewers.len());
    for reviewer in reviewers {
        if reviewer.approved {
            return None;
        }
        pending.push(reviewer.email.as_str());
    }

    Some(pending)
}
