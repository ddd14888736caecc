//! Summary counts derived from a filtered subset. The 24-hour "recent"
//! window is measured against wall-clock time at call time.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::constants::RECENT_WINDOW_HOURS;
use crate::logic::alert::SecurityAlert;
use crate::logic::audit::{AuditLog, AuditSeverity};
use crate::logic::device::Device;
use crate::logic::user::{User, UserStatus};

fn is_recent(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - timestamp < Duration::hours(RECENT_WINDOW_HOURS)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditStats {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub critical_count: usize,
    pub recent_count: usize,
    pub by_category: HashMap<String, usize>,
}

/// Summarize an audit subset for the trail header cards.
pub fn audit_stats(logs: &[AuditLog]) -> AuditStats {
    let now = Utc::now();
    let successful = logs.iter().filter(|l| l.success).count();

    let mut by_category = HashMap::new();
    for log in logs {
        *by_category.entry(log.category.as_str().to_string()).or_insert(0) += 1;
    }

    AuditStats {
        total: logs.len(),
        successful,
        failed: logs.len() - successful,
        critical_count: logs
            .iter()
            .filter(|l| l.severity == AuditSeverity::Critical)
            .count(),
        recent_count: logs.iter().filter(|l| is_recent(l.timestamp, now)).count(),
        by_category,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertStats {
    pub total: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub recent_count: usize,
    pub by_severity: HashMap<String, usize>,
}

pub fn alert_stats(alerts: &[SecurityAlert]) -> AlertStats {
    let now = Utc::now();
    let resolved = alerts.iter().filter(|a| a.resolved).count();

    let mut by_severity = HashMap::new();
    for alert in alerts {
        *by_severity.entry(alert.severity.as_str().to_string()).or_insert(0) += 1;
    }

    AlertStats {
        total: alerts.len(),
        resolved,
        unresolved: alerts.len() - resolved,
        recent_count: alerts
            .iter()
            .filter(|a| is_recent(a.timestamp, now))
            .count(),
        by_severity,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceStats {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub by_status: HashMap<String, usize>,
    pub by_type: HashMap<String, usize>,
}

pub fn device_stats(devices: &[Device]) -> DeviceStats {
    let online = devices.iter().filter(|d| d.is_online()).count();

    let mut by_status = HashMap::new();
    let mut by_type = HashMap::new();
    for device in devices {
        *by_status.entry(device.status.as_str().to_string()).or_insert(0) += 1;
        *by_type.entry(device.device_type.as_str().to_string()).or_insert(0) += 1;
    }

    DeviceStats {
        total: devices.len(),
        online,
        offline: devices.len() - online,
        by_status,
        by_type,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub two_factor_enabled: usize,
    pub by_role: HashMap<String, usize>,
}

pub fn user_stats(users: &[User]) -> UserStats {
    let mut by_role = HashMap::new();
    for user in users {
        *by_role.entry(user.role.as_str().to_string()).or_insert(0) += 1;
    }

    UserStats {
        total: users.len(),
        active: users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count(),
        two_factor_enabled: users.iter().filter(|u| u.two_factor_enabled).count(),
        by_role,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::alert::seed_alerts;
    use crate::logic::audit::seed_audit_logs;
    use crate::logic::device::seed_devices;
    use crate::logic::user::UserDirectory;

    #[test]
    fn test_audit_totals_partition() {
        let logs = seed_audit_logs();
        let stats = audit_stats(&logs);

        assert_eq!(stats.total, logs.len());
        assert_eq!(stats.successful + stats.failed, stats.total);
        assert_eq!(stats.by_category.values().sum::<usize>(), stats.total);
    }

    #[test]
    fn test_recent_count_covers_fresh_seed() {
        // seed logs all fall inside the last hour
        let logs = seed_audit_logs();
        let stats = audit_stats(&logs);
        assert_eq!(stats.recent_count, logs.len());
    }

    #[test]
    fn test_empty_subset_stats() {
        let stats = audit_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.successful, 0);
        assert_eq!(stats.failed, 0);
        assert!(stats.by_category.is_empty());
    }

    #[test]
    fn test_alert_resolution_partition() {
        let alerts = seed_alerts();
        let stats = alert_stats(&alerts);

        assert_eq!(stats.total, alerts.len());
        assert_eq!(stats.resolved + stats.unresolved, stats.total);
        assert_eq!(stats.by_severity.values().sum::<usize>(), stats.total);
    }

    #[test]
    fn test_device_status_groups() {
        let devices = seed_devices();
        let stats = device_stats(&devices);

        assert_eq!(stats.total, devices.len());
        assert_eq!(stats.online + stats.offline, stats.total);
        assert_eq!(stats.by_status.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_type.values().sum::<usize>(), stats.total);
    }

    #[test]
    fn test_user_role_groups() {
        let directory = UserDirectory::new();
        let stats = user_stats(directory.list());

        assert_eq!(stats.total, 5);
        assert_eq!(stats.by_role.values().sum::<usize>(), stats.total);
        assert!(stats.active <= stats.total);
    }
}
