//! Audit Log Types
//!
//! Core types for the compliance trail. The severity scale here
//! (info/warning/error/critical) is distinct from the alert and threat
//! scales and must not be unified with them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// ENUMERATIONS
// ============================================================================

/// Functional area an audited action belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditCategory {
    Authentication,
    UserManagement,
    DeviceManagement,
    Security,
    System,
    Firmware,
    Configuration,
}

impl AuditCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditCategory::Authentication => "authentication",
            AuditCategory::UserManagement => "user_management",
            AuditCategory::DeviceManagement => "device_management",
            AuditCategory::Security => "security",
            AuditCategory::System => "system",
            AuditCategory::Firmware => "firmware",
            AuditCategory::Configuration => "configuration",
        }
    }
}

impl std::fmt::Display for AuditCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audit entry severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl AuditSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditSeverity::Info => "info",
            AuditSeverity::Warning => "warning",
            AuditSeverity::Error => "error",
            AuditSeverity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for AuditSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RECORD TYPES
// ============================================================================

/// One field-level change recorded with a mutating action. Values are kept
/// as loose JSON - the audited systems record strings, numbers, booleans
/// and nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub old_value: Value,
    pub new_value: Value,
}

/// One entry in the audit trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub username: String,
    pub user_role: String,
    pub action: String,
    pub category: AuditCategory,
    pub severity: AuditSeverity,
    pub resource: String,
    pub resource_id: Option<String>,
    pub details: String,
    pub ip_address: String,
    pub user_agent: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<FieldChange>,
}
