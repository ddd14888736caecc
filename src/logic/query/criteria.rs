//! Filter criteria for each record collection. A criteria struct with
//! every field unset matches everything.

use chrono::{DateTime, Utc};

use crate::logic::alert::{AlertSeverity, AlertType, SecurityAlert};
use crate::logic::audit::{AuditCategory, AuditLog, AuditSeverity};
use crate::logic::device::{Device, DeviceStatus, DeviceType};
use crate::logic::threat::{ThreatEvent, ThreatSeverity, ThreatType};
use crate::logic::user::{User, UserRole, UserStatus};

/// A predicate over one record type. Implementations compose their
/// dimensions conjunctively.
pub trait Criteria<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Case-insensitive substring test used by every free-text dimension.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn search_hits(needle: &Option<String>, fields: &[&str]) -> bool {
    match needle {
        None => true,
        Some(term) if term.is_empty() => true,
        Some(term) => fields.iter().any(|field| contains_ignore_case(field, term)),
    }
}

fn eq_or_unset<T: PartialEq>(constraint: &Option<T>, value: &T) -> bool {
    constraint.as_ref().map_or(true, |c| c == value)
}

fn in_range(
    timestamp: DateTime<Utc>,
    start: &Option<DateTime<Utc>>,
    end: &Option<DateTime<Utc>>,
) -> bool {
    if let Some(start) = start {
        if timestamp < *start {
            return false;
        }
    }
    if let Some(end) = end {
        if timestamp > *end {
            return false;
        }
    }
    true
}

// ============================================================================
// AUDIT LOGS
// ============================================================================

/// Criteria for the audit trail view. Search covers username, action,
/// details and resource; the date bounds are inclusive on both ends.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    pub search: Option<String>,
    pub category: Option<AuditCategory>,
    pub severity: Option<AuditSeverity>,
    pub user_id: Option<String>,
    pub success: Option<bool>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl Criteria<AuditLog> for AuditFilter {
    fn matches(&self, log: &AuditLog) -> bool {
        search_hits(
            &self.search,
            &[&log.username, &log.action, &log.details, &log.resource],
        ) && eq_or_unset(&self.category, &log.category)
            && eq_or_unset(&self.severity, &log.severity)
            && eq_or_unset(&self.user_id, &log.user_id)
            && eq_or_unset(&self.success, &log.success)
            && in_range(log.timestamp, &self.start, &self.end)
    }
}

// ============================================================================
// DEVICES
// ============================================================================

/// Criteria for the device fleet view. Search covers name and the
/// location address.
#[derive(Debug, Clone, Default)]
pub struct DeviceFilter {
    pub search: Option<String>,
    pub status: Option<DeviceStatus>,
    pub device_type: Option<DeviceType>,
}

impl Criteria<Device> for DeviceFilter {
    fn matches(&self, device: &Device) -> bool {
        search_hits(&self.search, &[&device.name, &device.location.address])
            && eq_or_unset(&self.status, &device.status)
            && eq_or_unset(&self.device_type, &device.device_type)
    }
}

// ============================================================================
// USERS
// ============================================================================

/// Criteria for the user directory view. Search covers full name, email
/// and username.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl Criteria<User> for UserFilter {
    fn matches(&self, user: &User) -> bool {
        search_hits(
            &self.search,
            &[&user.full_name, &user.email, &user.username],
        ) && eq_or_unset(&self.role, &user.role)
            && eq_or_unset(&self.status, &user.status)
    }
}

// ============================================================================
// ALERTS AND THREATS
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct AlertFilter {
    pub severity: Option<AlertSeverity>,
    pub alert_type: Option<AlertType>,
    pub resolved: Option<bool>,
}

impl Criteria<SecurityAlert> for AlertFilter {
    fn matches(&self, alert: &SecurityAlert) -> bool {
        eq_or_unset(&self.severity, &alert.severity)
            && eq_or_unset(&self.alert_type, &alert.alert_type)
            && eq_or_unset(&self.resolved, &alert.resolved)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThreatFilter {
    pub severity: Option<ThreatSeverity>,
    pub threat_type: Option<ThreatType>,
}

impl Criteria<ThreatEvent> for ThreatFilter {
    fn matches(&self, event: &ThreatEvent) -> bool {
        eq_or_unset(&self.severity, &event.severity)
            && eq_or_unset(&self.threat_type, &event.threat_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::audit::seed_audit_logs;
    use crate::logic::device::seed_devices;
    use crate::logic::query::filter;
    use crate::logic::user::UserDirectory;

    #[test]
    fn test_unset_filter_returns_input_in_order() {
        let logs = seed_audit_logs();
        let out = filter(&logs, &AuditFilter::default());

        assert_eq!(out.len(), logs.len());
        let original: Vec<&str> = logs.iter().map(|l| l.id.as_str()).collect();
        let filtered: Vec<&str> = out.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(original, filtered);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let logs = seed_audit_logs();
        let criteria = AuditFilter {
            severity: Some(AuditSeverity::Warning),
            ..Default::default()
        };

        let once = filter(&logs, &criteria);
        let twice = filter(&once, &criteria);
        assert_eq!(
            once.iter().map(|l| &l.id).collect::<Vec<_>>(),
            twice.iter().map(|l| &l.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_search_is_case_insensitive_and_sound() {
        let logs = seed_audit_logs();
        let criteria = AuditFilter {
            search: Some("ADMIN".to_string()),
            ..Default::default()
        };

        let out = filter(&logs, &criteria);
        assert!(!out.is_empty());
        for log in &out {
            let hit = contains_ignore_case(&log.username, "admin")
                || contains_ignore_case(&log.action, "admin")
                || contains_ignore_case(&log.details, "admin")
                || contains_ignore_case(&log.resource, "admin");
            assert!(hit, "log {} matched without containing the term", log.id);
        }
    }

    #[test]
    fn test_severity_constraint_selects_exactly_matching_records() {
        let mut logs = seed_audit_logs();
        logs.truncate(3);
        logs[0].severity = AuditSeverity::Info;
        logs[1].severity = AuditSeverity::Warning;
        logs[2].severity = AuditSeverity::Critical;

        let criteria = AuditFilter {
            severity: Some(AuditSeverity::Critical),
            ..Default::default()
        };
        let out = filter(&logs, &criteria);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, logs[2].id);
    }

    #[test]
    fn test_type_constraint_ignores_status_when_status_unset() {
        let devices = seed_devices();
        let sensors = devices
            .iter()
            .filter(|d| d.device_type == DeviceType::Sensor)
            .count();

        let criteria = DeviceFilter {
            device_type: Some(DeviceType::Sensor),
            ..Default::default()
        };
        let out = filter(&devices, &criteria);

        assert_eq!(out.len(), sensors);
        assert!(out.iter().all(|d| d.device_type == DeviceType::Sensor));
    }

    #[test]
    fn test_single_instant_date_range_is_inclusive_both_sides() {
        let mut logs = seed_audit_logs();
        let pivot = logs[3].timestamp;

        let criteria = AuditFilter {
            start: Some(pivot),
            end: Some(pivot),
            ..Default::default()
        };
        let out = filter(&logs, &criteria);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].timestamp, pivot);

        // widen one bound and the neighbors come back in
        logs.sort_by_key(|l| l.timestamp);
        let criteria = AuditFilter {
            start: Some(logs[0].timestamp),
            end: Some(pivot),
            ..Default::default()
        };
        assert!(filter(&logs, &criteria).len() > 1);
    }

    #[test]
    fn test_user_search_covers_full_name_email_username() {
        let directory = UserDirectory::new();
        let users = directory.list().to_vec();

        let criteria = UserFilter {
            search: Some("jane".to_string()),
            ..Default::default()
        };
        let out = filter(&users, &criteria);

        assert!(!out.is_empty());
        assert!(out.iter().all(|u| {
            contains_ignore_case(&u.full_name, "jane")
                || contains_ignore_case(&u.email, "jane")
                || contains_ignore_case(&u.username, "jane")
        }));
    }

    #[test]
    fn test_conjunction_of_dimensions() {
        let logs = seed_audit_logs();
        let criteria = AuditFilter {
            success: Some(true),
            severity: Some(AuditSeverity::Info),
            ..Default::default()
        };

        let out = filter(&logs, &criteria);
        assert!(out
            .iter()
            .all(|l| l.success && l.severity == AuditSeverity::Info));
    }
}
