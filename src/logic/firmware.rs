//! Firmware Rollouts
//!
//! Catalog of firmware updates and their deployment lifecycle:
//! pending -> deploying -> completed (or failed). Progress only moves
//! while a rollout is deploying.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::device::DeviceType;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    Pending,
    Deploying,
    Completed,
    Failed,
}

impl UpdateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateStatus::Pending => "pending",
            UpdateStatus::Deploying => "deploying",
            UpdateStatus::Completed => "completed",
            UpdateStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirmwareUpdate {
    pub id: String,
    pub version: String,
    pub device_types: Vec<DeviceType>,
    pub status: UpdateStatus,
    /// 0-100, meaningful only while deploying
    pub progress: u8,
    pub release_date: DateTime<Utc>,
    pub security_patch: bool,
}

/// Rollout counts shown on the firmware overview cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirmwareSummary {
    pub active_deployments: usize,
    pub pending_updates: usize,
    pub security_patches: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirmwareError {
    UpdateNotFound,
    InvalidTransition {
        from: UpdateStatus,
        to: UpdateStatus,
    },
}

impl std::fmt::Display for FirmwareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FirmwareError::UpdateNotFound => write!(f, "Firmware update not found"),
            FirmwareError::InvalidTransition { from, to } => {
                write!(f, "Cannot move rollout from {} to {}", from, to)
            }
        }
    }
}

impl std::error::Error for FirmwareError {}

// ============================================================================
// CATALOG
// ============================================================================

/// Build the seed update catalog.
pub fn seed_firmware_updates() -> Vec<FirmwareUpdate> {
    vec![
        FirmwareUpdate {
            id: "fw-001".to_string(),
            version: "2.1.5".to_string(),
            device_types: vec![DeviceType::Sensor, DeviceType::Gateway],
            status: UpdateStatus::Deploying,
            progress: 65,
            release_date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            security_patch: true,
        },
        FirmwareUpdate {
            id: "fw-002".to_string(),
            version: "3.2.2".to_string(),
            device_types: vec![DeviceType::Camera],
            status: UpdateStatus::Pending,
            progress: 0,
            release_date: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
            security_patch: false,
        },
        FirmwareUpdate {
            id: "fw-003".to_string(),
            version: "1.8.3".to_string(),
            device_types: vec![DeviceType::Actuator],
            status: UpdateStatus::Completed,
            progress: 100,
            release_date: Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
            security_patch: true,
        },
    ]
}

/// Summarize the catalog for the overview cards.
pub fn summarize(updates: &[FirmwareUpdate]) -> FirmwareSummary {
    FirmwareSummary {
        active_deployments: updates
            .iter()
            .filter(|u| u.status == UpdateStatus::Deploying)
            .count(),
        pending_updates: updates
            .iter()
            .filter(|u| u.status == UpdateStatus::Pending)
            .count(),
        security_patches: updates.iter().filter(|u| u.security_patch).count(),
    }
}

fn find_mut<'a>(
    updates: &'a mut [FirmwareUpdate],
    id: &str,
) -> Result<&'a mut FirmwareUpdate, FirmwareError> {
    updates
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or(FirmwareError::UpdateNotFound)
}

/// Kick off a pending rollout.
pub fn start_deployment(updates: &mut [FirmwareUpdate], id: &str) -> Result<(), FirmwareError> {
    let update = find_mut(updates, id)?;
    if update.status != UpdateStatus::Pending {
        return Err(FirmwareError::InvalidTransition {
            from: update.status,
            to: UpdateStatus::Deploying,
        });
    }

    update.status = UpdateStatus::Deploying;
    update.progress = 0;
    log::info!("Started deployment of firmware {} ({})", update.version, id);
    Ok(())
}

/// Advance a deploying rollout by `delta` percent, completing it at 100.
/// Rollouts in any other state are left untouched.
pub fn advance_deployment(
    updates: &mut [FirmwareUpdate],
    id: &str,
    delta: u8,
) -> Result<(), FirmwareError> {
    let update = find_mut(updates, id)?;
    if update.status != UpdateStatus::Deploying {
        return Ok(());
    }

    update.progress = update.progress.saturating_add(delta).min(100);
    if update.progress == 100 {
        update.status = UpdateStatus::Completed;
        log::info!("Firmware {} deployment completed", update.version);
    }
    Ok(())
}

/// Mark a deploying rollout as failed.
pub fn fail_deployment(updates: &mut [FirmwareUpdate], id: &str) -> Result<(), FirmwareError> {
    let update = find_mut(updates, id)?;
    if update.status != UpdateStatus::Deploying {
        return Err(FirmwareError::InvalidTransition {
            from: update.status,
            to: UpdateStatus::Failed,
        });
    }

    update.status = UpdateStatus::Failed;
    log::warn!("Firmware {} deployment failed at {}%", update.version, update.progress);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_summary() {
        let updates = seed_firmware_updates();
        let summary = summarize(&updates);

        assert_eq!(summary.active_deployments, 1);
        assert_eq!(summary.pending_updates, 1);
        assert_eq!(summary.security_patches, 2);
    }

    #[test]
    fn test_deployment_lifecycle() {
        let mut updates = seed_firmware_updates();

        start_deployment(&mut updates, "fw-002").unwrap();
        assert_eq!(updates[1].status, UpdateStatus::Deploying);
        assert_eq!(updates[1].progress, 0);

        advance_deployment(&mut updates, "fw-002", 60).unwrap();
        assert_eq!(updates[1].progress, 60);

        advance_deployment(&mut updates, "fw-002", 60).unwrap();
        assert_eq!(updates[1].progress, 100);
        assert_eq!(updates[1].status, UpdateStatus::Completed);
    }

    #[test]
    fn test_start_rejects_non_pending() {
        let mut updates = seed_firmware_updates();

        let err = start_deployment(&mut updates, "fw-003").unwrap_err();
        assert_eq!(
            err,
            FirmwareError::InvalidTransition {
                from: UpdateStatus::Completed,
                to: UpdateStatus::Deploying,
            }
        );
    }

    #[test]
    fn test_advance_ignores_completed() {
        let mut updates = seed_firmware_updates();

        advance_deployment(&mut updates, "fw-003", 10).unwrap();
        assert_eq!(updates[2].status, UpdateStatus::Completed);
        assert_eq!(updates[2].progress, 100);
    }

    #[test]
    fn test_fail_marks_deploying() {
        let mut updates = seed_firmware_updates();

        fail_deployment(&mut updates, "fw-001").unwrap();
        assert_eq!(updates[0].status, UpdateStatus::Failed);

        assert_eq!(
            fail_deployment(&mut updates, "missing").unwrap_err(),
            FirmwareError::UpdateNotFound
        );
    }
}
