//! Threat Types
//!
//! Core types for the threat timeline. No logic - just data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ENUMERATIONS
// ============================================================================

/// Threat classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatType {
    Malware,
    Intrusion,
    Anomaly,
    Ddos,
    DataBreach,
    UnauthorizedAccess,
}

impl ThreatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatType::Malware => "malware",
            ThreatType::Intrusion => "intrusion",
            ThreatType::Anomaly => "anomaly",
            ThreatType::Ddos => "ddos",
            ThreatType::DataBreach => "data_breach",
            ThreatType::UnauthorizedAccess => "unauthorized_access",
        }
    }
}

impl std::fmt::Display for ThreatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Threat severity. Same labels as the alert scale but deliberately a
/// separate type - the entities do not share a taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ThreatSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatSeverity::Critical => "critical",
            ThreatSeverity::High => "high",
            ThreatSeverity::Medium => "medium",
            ThreatSeverity::Low => "low",
        }
    }
}

impl std::fmt::Display for ThreatSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Handling state of a threat; only ever moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatStatus {
    Detected,
    Investigating,
    Mitigated,
    Resolved,
}

impl ThreatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatStatus::Detected => "detected",
            ThreatStatus::Investigating => "investigating",
            ThreatStatus::Mitigated => "mitigated",
            ThreatStatus::Resolved => "resolved",
        }
    }

    /// Mitigation details only exist once handling reached this far
    pub fn is_handled(&self) -> bool {
        matches!(self, ThreatStatus::Mitigated | ThreatStatus::Resolved)
    }
}

impl std::fmt::Display for ThreatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RECORD TYPES
// ============================================================================

/// One entry in the recent-threat timeline (newest first, cap 15)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub threat_type: ThreatType,
    pub severity: ThreatSeverity,
    pub source: String,
    pub target: String,
    pub description: String,
    pub status: ThreatStatus,
    /// ML confidence score, 70-100
    pub confidence: u8,
    pub affected_devices: u32,
    pub data_size: Option<String>,
    pub attack_vector: Option<String>,
    /// Present only when `status.is_handled()`
    pub mitigation_action: Option<String>,
}

/// One hourly sample of detection metrics (newest first, cap 24)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatMetricPoint {
    pub timestamp: DateTime<Utc>,
    pub threats_detected: u32,
    pub threats_blocked: u32,
    /// 30-70
    pub risk_score: u32,
    /// 90-100 %
    pub ml_accuracy: u32,
    pub false_positives: u32,
}
