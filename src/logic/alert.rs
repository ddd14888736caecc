//! Security Alerts
//!
//! Per-device alert records plus the 30-second feed that appends one
//! synthetic alert at the head of the collection each tick.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::FEED_TICK_INTERVAL_MS;
use crate::logic::feed::{self, FeedHandle};

// ============================================================================
// TYPES
// ============================================================================

/// What triggered an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Anomaly,
    Authentication,
    Network,
    Firmware,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Anomaly => "anomaly",
            AlertType::Authentication => "authentication",
            AlertType::Network => "network",
            AlertType::Firmware => "firmware",
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Alert severity. Kept separate from the audit log severity scale - the
/// two overlap in name only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Critical => "critical",
            AlertSeverity::High => "high",
            AlertSeverity::Medium => "medium",
            AlertSeverity::Low => "low",
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A security alert raised against one device. `device_id` is a reference
/// into the device collection, not ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityAlert {
    pub id: String,
    pub device_id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub resolved: bool,
}

// ============================================================================
// GENERATOR
// ============================================================================

const FEED_MESSAGES: &[&str] = &[
    "Unusual data pattern detected - possible tampering",
    "Repeated connection resets observed",
    "Unexpected firmware checksum mismatch",
    "Burst of failed authentication attempts",
    "Telemetry volume outside expected envelope",
];

/// Build the seed alert list, newest first.
pub fn seed_alerts() -> Vec<SecurityAlert> {
    let now = Utc::now();

    vec![
        SecurityAlert {
            id: "alert-001".to_string(),
            device_id: "dev-003".to_string(),
            alert_type: AlertType::Anomaly,
            severity: AlertSeverity::High,
            message: "Unusual network traffic detected".to_string(),
            timestamp: now - Duration::minutes(10),
            resolved: false,
        },
        SecurityAlert {
            id: "alert-002".to_string(),
            device_id: "dev-004".to_string(),
            alert_type: AlertType::Authentication,
            severity: AlertSeverity::Critical,
            message: "Multiple failed authentication attempts".to_string(),
            timestamp: now - Duration::minutes(20),
            resolved: false,
        },
        SecurityAlert {
            id: "alert-003".to_string(),
            device_id: "dev-001".to_string(),
            alert_type: AlertType::Network,
            severity: AlertSeverity::Medium,
            message: "High latency detected".to_string(),
            timestamp: now - Duration::minutes(30),
            resolved: true,
        },
        SecurityAlert {
            id: "alert-004".to_string(),
            device_id: "dev-002".to_string(),
            alert_type: AlertType::Firmware,
            severity: AlertSeverity::Low,
            message: "Firmware update available".to_string(),
            timestamp: now - Duration::minutes(40),
            resolved: false,
        },
        SecurityAlert {
            id: "alert-005".to_string(),
            device_id: "dev-005".to_string(),
            alert_type: AlertType::Anomaly,
            severity: AlertSeverity::Critical,
            message: "Unauthorized access attempt detected".to_string(),
            timestamp: now - Duration::minutes(50),
            resolved: false,
        },
    ]
}

/// One feed tick: returns a fresh collection with a synthetic unresolved
/// alert at the head. Existing entries are untouched; resolved alerts stay
/// resolved.
pub fn tick(alerts: &[SecurityAlert]) -> Vec<SecurityAlert> {
    let mut rng = rand::thread_rng();

    let alert_types = [AlertType::Anomaly, AlertType::Network, AlertType::Authentication];
    let severities = [AlertSeverity::Low, AlertSeverity::Medium, AlertSeverity::High];

    let alert_type = alert_types[rng.gen_range(0..alert_types.len())];
    let severity = severities[rng.gen_range(0..severities.len())];
    let message = FEED_MESSAGES[rng.gen_range(0..FEED_MESSAGES.len())];

    let new_alert = SecurityAlert {
        id: format!("alert-{}", Uuid::new_v4()),
        device_id: format!("dev-{:03}", rng.gen_range(1..=5)),
        alert_type,
        severity,
        message: message.to_string(),
        timestamp: Utc::now(),
        resolved: false,
    };

    let mut next = Vec::with_capacity(alerts.len() + 1);
    next.push(new_alert);
    next.extend_from_slice(alerts);
    next
}

// ============================================================================
// FEED
// ============================================================================

pub type AlertStore = Arc<RwLock<Vec<SecurityAlert>>>;

/// Start the alert feed; one synthetic alert per 30-second tick.
pub fn start_alert_feed(store: AlertStore) -> FeedHandle {
    feed::spawn("alerts", FEED_TICK_INTERVAL_MS, move || {
        let next = tick(&store.read());
        *store.write() = next;
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_alerts() {
        let alerts = seed_alerts();
        assert_eq!(alerts.len(), 5);
        assert_eq!(alerts.iter().filter(|a| a.resolved).count(), 1);
    }

    #[test]
    fn test_tick_prepends_unresolved_alert() {
        let alerts = seed_alerts();
        let next = tick(&alerts);

        assert_eq!(next.len(), alerts.len() + 1);
        assert!(!next[0].resolved);
        assert_eq!(next[1].id, alerts[0].id);

        // Resolved state never moves backwards
        for (after, before) in next[1..].iter().zip(alerts.iter()) {
            assert_eq!(after.resolved, before.resolved);
        }
    }

    #[test]
    fn test_tick_ids_stay_unique() {
        let mut alerts = seed_alerts();
        for _ in 0..20 {
            alerts = tick(&alerts);
        }

        let mut ids: Vec<_> = alerts.iter().map(|a| a.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), alerts.len());
    }
}
