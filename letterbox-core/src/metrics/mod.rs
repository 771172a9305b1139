//! Metrics for observability
//!
//! Counters go through the `metrics` facade. Nothing is recorded until the
//! embedding application installs a recorder; until then every call is a
//! no-op.

use metrics::{counter, describe_counter};

pub const CONVERSATIONS_STARTED: &str = "letterbox.conversations.started";
pub const REPLIES_SENT: &str = "letterbox.replies.sent";
pub const PUBLICATION_TRANSITIONS: &str = "letterbox.publication.transitions";
pub const ACCOUNTS_BANNED: &str = "letterbox.accounts.banned";
pub const ACCOUNTS_UNBANNED: &str = "letterbox.accounts.unbanned";
pub const REPLIES_LABELED: &str = "letterbox.replies.labeled";
pub const LABELS_REJECTED: &str = "letterbox.labels.rejected";
pub const POLICY_DENIED: &str = "letterbox.policy.denied";

/// Initialize metrics with descriptions
pub fn init_metrics() {
    // Discussion metrics
    describe_counter!(CONVERSATIONS_STARTED, "Number of conversations started from letters");
    describe_counter!(REPLIES_SENT, "Number of replies sent");
    describe_counter!(
        PUBLICATION_TRANSITIONS,
        "Number of publication consent flag changes"
    );

    // Moderation metrics
    describe_counter!(ACCOUNTS_BANNED, "Number of accounts banned");
    describe_counter!(ACCOUNTS_UNBANNED, "Number of accounts unbanned");
    describe_counter!(REPLIES_LABELED, "Number of replies labeled");
    describe_counter!(LABELS_REJECTED, "Number of rejected label reassignments");

    // Policy metrics
    describe_counter!(POLICY_DENIED, "Number of denied authorization checks");
}

/// Record a counter metric
pub fn record_counter(name: &'static str, value: u64) {
    counter!(name).increment(value);
}
