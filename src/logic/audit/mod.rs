//! Audit Logs
//!
//! Compliance trail for the platform: seeded mock entries, the 30-second
//! feed appending synthetic health-check entries, and CSV export of a
//! filtered subset.

pub mod export;
pub mod generator;
pub mod types;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::constants::FEED_TICK_INTERVAL_MS;
use crate::logic::feed::{self, FeedHandle};

pub use export::{to_csv, write_csv};
pub use generator::{seed_audit_logs, tick};
pub use types::{AuditCategory, AuditLog, AuditSeverity, FieldChange};

pub type AuditStore = Arc<RwLock<Vec<AuditLog>>>;

/// Start the audit feed; one synthetic entry per 30-second tick.
pub fn start_audit_feed(store: AuditStore) -> FeedHandle {
    feed::spawn("audit-log", FEED_TICK_INTERVAL_MS, move || {
        let next = tick(&store.read());
        *store.write() = next;
    })
}

/// Distinct users appearing in a log collection, in first-seen order.
/// Backs the user selector of the audit view.
pub fn distinct_users(logs: &[AuditLog]) -> Vec<(String, String)> {
    let mut seen = Vec::new();
    for log in logs {
        if !seen.iter().any(|(id, _)| *id == log.user_id) {
            seen.push((log.user_id.clone(), log.username.clone()));
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_users_first_seen_order() {
        let logs = seed_audit_logs();
        let users = distinct_users(&logs);

        let ids: Vec<_> = users.iter().map(|(id, _)| id.as_str()).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert!(users.iter().any(|(_, name)| name == "admin"));
    }
}
