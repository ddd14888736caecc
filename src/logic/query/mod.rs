//! Query Engine
//!
//! Pure filtering over the dashboard's record collections plus the
//! derived summary counts. Every filter dimension is independently
//! optional; set dimensions compose with logical AND, and filtering
//! never reorders its input.

mod criteria;
mod stats;

pub use criteria::{
    contains_ignore_case, AlertFilter, AuditFilter, Criteria, DeviceFilter, ThreatFilter,
    UserFilter,
};
pub use stats::{
    alert_stats, audit_stats, device_stats, user_stats, AlertStats, AuditStats, DeviceStats,
    UserStats,
};

/// Compute the visible subset of `records` under `criteria`, preserving
/// input order.
pub fn filter<T: Clone, C: Criteria<T>>(records: &[T], criteria: &C) -> Vec<T> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
