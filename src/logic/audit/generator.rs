//! Audit Log Mock Generator

use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use super::types::{AuditCategory, AuditLog, AuditSeverity, FieldChange};

const DESKTOP_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Build the seed audit trail, newest first.
pub fn seed_audit_logs() -> Vec<AuditLog> {
    let now = Utc::now();

    vec![
        AuditLog {
            id: "1".to_string(),
            timestamp: now - Duration::minutes(2),
            user_id: "1".to_string(),
            username: "admin".to_string(),
            user_role: "admin".to_string(),
            action: "User Login".to_string(),
            category: AuditCategory::Authentication,
            severity: AuditSeverity::Info,
            resource: "Authentication System".to_string(),
            resource_id: None,
            details: "Successful login with 2FA".to_string(),
            ip_address: "192.168.1.100".to_string(),
            user_agent: DESKTOP_AGENT.to_string(),
            success: true,
            changes: Vec::new(),
        },
        AuditLog {
            id: "2".to_string(),
            timestamp: now - Duration::minutes(7),
            user_id: "2".to_string(),
            username: "john.doe".to_string(),
            user_role: "operator".to_string(),
            action: "Device Configuration Updated".to_string(),
            category: AuditCategory::DeviceManagement,
            severity: AuditSeverity::Warning,
            resource: "Sensor Device".to_string(),
            resource_id: Some("sensor-001".to_string()),
            details: "Updated sensor sampling rate from 60s to 30s".to_string(),
            ip_address: "192.168.1.105".to_string(),
            user_agent: DESKTOP_AGENT.to_string(),
            success: true,
            changes: vec![
                FieldChange {
                    field: "sampling_rate".to_string(),
                    old_value: json!("60s"),
                    new_value: json!("30s"),
                },
                FieldChange {
                    field: "last_modified".to_string(),
                    old_value: json!("2024-01-15T09:30:00Z"),
                    new_value: json!("2024-01-15T10:25:42Z"),
                },
            ],
        },
        AuditLog {
            id: "3".to_string(),
            timestamp: now - Duration::minutes(12),
            user_id: "3".to_string(),
            username: "jane.smith".to_string(),
            user_role: "security_analyst".to_string(),
            action: "Security Alert Acknowledged".to_string(),
            category: AuditCategory::Security,
            severity: AuditSeverity::Critical,
            resource: "Security Alert System".to_string(),
            resource_id: Some("alert-456".to_string()),
            details: "Acknowledged critical security alert for unauthorized access attempt"
                .to_string(),
            ip_address: "192.168.1.110".to_string(),
            user_agent: DESKTOP_AGENT.to_string(),
            success: true,
            changes: Vec::new(),
        },
        AuditLog {
            id: "4".to_string(),
            timestamp: now - Duration::minutes(17),
            user_id: "1".to_string(),
            username: "admin".to_string(),
            user_role: "admin".to_string(),
            action: "User Created".to_string(),
            category: AuditCategory::UserManagement,
            severity: AuditSeverity::Info,
            resource: "User Management System".to_string(),
            resource_id: Some("user-789".to_string()),
            details: "Created new user account for Alice Johnson".to_string(),
            ip_address: "192.168.1.100".to_string(),
            user_agent: DESKTOP_AGENT.to_string(),
            success: true,
            changes: vec![
                FieldChange {
                    field: "username".to_string(),
                    old_value: json!(null),
                    new_value: json!("alice.johnson"),
                },
                FieldChange {
                    field: "role".to_string(),
                    old_value: json!(null),
                    new_value: json!("operator"),
                },
                FieldChange {
                    field: "status".to_string(),
                    old_value: json!(null),
                    new_value: json!("active"),
                },
            ],
        },
        AuditLog {
            id: "5".to_string(),
            timestamp: now - Duration::minutes(22),
            user_id: "2".to_string(),
            username: "john.doe".to_string(),
            user_role: "operator".to_string(),
            action: "Firmware Update Failed".to_string(),
            category: AuditCategory::Firmware,
            severity: AuditSeverity::Error,
            resource: "Firmware Management System".to_string(),
            resource_id: Some("firmware-v2.1.0".to_string()),
            details: "Failed to update firmware on gateway device due to connectivity issues"
                .to_string(),
            ip_address: "192.168.1.105".to_string(),
            user_agent: DESKTOP_AGENT.to_string(),
            success: false,
            changes: Vec::new(),
        },
        AuditLog {
            id: "6".to_string(),
            timestamp: now - Duration::minutes(37),
            user_id: "4".to_string(),
            username: "bob.wilson".to_string(),
            user_role: "viewer".to_string(),
            action: "Failed Login Attempt".to_string(),
            category: AuditCategory::Authentication,
            severity: AuditSeverity::Warning,
            resource: "Authentication System".to_string(),
            resource_id: None,
            details: "Failed login attempt - incorrect password".to_string(),
            ip_address: "192.168.1.120".to_string(),
            user_agent: DESKTOP_AGENT.to_string(),
            success: false,
            changes: Vec::new(),
        },
        AuditLog {
            id: "7".to_string(),
            timestamp: now - Duration::minutes(47),
            user_id: "1".to_string(),
            username: "admin".to_string(),
            user_role: "admin".to_string(),
            action: "System Configuration Updated".to_string(),
            category: AuditCategory::Configuration,
            severity: AuditSeverity::Info,
            resource: "System Settings".to_string(),
            resource_id: None,
            details: "Updated system timezone and notification settings".to_string(),
            ip_address: "192.168.1.100".to_string(),
            user_agent: DESKTOP_AGENT.to_string(),
            success: true,
            changes: vec![
                FieldChange {
                    field: "timezone".to_string(),
                    old_value: json!("UTC"),
                    new_value: json!("America/New_York"),
                },
                FieldChange {
                    field: "email_notifications".to_string(),
                    old_value: json!(false),
                    new_value: json!(true),
                },
            ],
        },
        AuditLog {
            id: "8".to_string(),
            timestamp: now - Duration::minutes(62),
            user_id: "3".to_string(),
            username: "jane.smith".to_string(),
            user_role: "security_analyst".to_string(),
            action: "Security Scan Initiated".to_string(),
            category: AuditCategory::Security,
            severity: AuditSeverity::Info,
            resource: "Security Scanner".to_string(),
            resource_id: None,
            details: "Initiated comprehensive security scan of all IoT devices".to_string(),
            ip_address: "192.168.1.110".to_string(),
            user_agent: DESKTOP_AGENT.to_string(),
            success: true,
            changes: Vec::new(),
        },
    ]
}

/// One feed tick: returns a fresh collection with a synthetic health-check
/// entry at the head.
pub fn tick(logs: &[AuditLog]) -> Vec<AuditLog> {
    let entry = AuditLog {
        id: Uuid::new_v4().to_string(),
        timestamp: Utc::now(),
        user_id: "1".to_string(),
        username: "system".to_string(),
        user_role: "system".to_string(),
        action: "System Health Check".to_string(),
        category: AuditCategory::System,
        severity: AuditSeverity::Info,
        resource: "System Monitor".to_string(),
        resource_id: None,
        details: "Automated system health check completed successfully".to_string(),
        ip_address: "127.0.0.1".to_string(),
        user_agent: "System/1.0".to_string(),
        success: true,
        changes: Vec::new(),
    };

    let mut next = Vec::with_capacity(logs.len() + 1);
    next.push(entry);
    next.extend_from_slice(logs);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_logs_newest_first() {
        let logs = seed_audit_logs();
        assert_eq!(logs.len(), 8);
        assert!(logs.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_seed_logs_unique_ids() {
        let logs = seed_audit_logs();
        let mut ids: Vec<_> = logs.iter().map(|l| l.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), logs.len());
    }

    #[test]
    fn test_tick_prepends_health_check() {
        let logs = seed_audit_logs();
        let next = tick(&logs);

        assert_eq!(next.len(), logs.len() + 1);
        assert_eq!(next[0].action, "System Health Check");
        assert_eq!(next[0].category, AuditCategory::System);
        assert!(next[0].success);
        assert_eq!(next[1].id, logs[0].id);
    }
}
