//! Device Mock Generator
//!
//! Seeds the fixed device roster and recomputes the volatile fields on
//! every telemetry tick. Generation is infallible: every random value is
//! drawn from a bounded range.

use chrono::{Duration, Utc};
use rand::Rng;

use super::types::{DataPoint, Device, DeviceStatus, DeviceType, Location, SecurityLevel};
use crate::constants::METRIC_WINDOW_SIZE;
use crate::logic::window;

/// Build the seed device inventory, each with a full 24-point history of
/// hourly samples.
pub fn seed_devices() -> Vec<Device> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    let mut devices = vec![
        Device {
            id: "dev-001".to_string(),
            name: "Temperature Sensor A1".to_string(),
            device_type: DeviceType::Sensor,
            status: DeviceStatus::Online,
            location: Location {
                lat: 40.7128,
                lng: -74.0060,
                address: "Building A, Floor 1".to_string(),
            },
            last_seen: now,
            firmware_version: "2.1.3".to_string(),
            battery_level: Some(85.0),
            temperature: Some(22.5),
            security_level: SecurityLevel::High,
            data_points: Vec::new(),
        },
        Device {
            id: "dev-002".to_string(),
            name: "Security Camera B2".to_string(),
            device_type: DeviceType::Camera,
            status: DeviceStatus::Online,
            location: Location {
                lat: 40.7580,
                lng: -73.9855,
                address: "Building B, Floor 2".to_string(),
            },
            last_seen: now,
            firmware_version: "1.8.5".to_string(),
            battery_level: None,
            temperature: Some(28.1),
            security_level: SecurityLevel::Medium,
            data_points: Vec::new(),
        },
        Device {
            id: "dev-003".to_string(),
            name: "Gateway C1".to_string(),
            device_type: DeviceType::Gateway,
            status: DeviceStatus::Warning,
            location: Location {
                lat: 40.7505,
                lng: -73.9934,
                address: "Building C, Floor 1".to_string(),
            },
            last_seen: now - Duration::minutes(5),
            firmware_version: "3.2.1".to_string(),
            battery_level: Some(45.0),
            temperature: None,
            security_level: SecurityLevel::High,
            data_points: Vec::new(),
        },
        Device {
            id: "dev-004".to_string(),
            name: "Motion Detector D3".to_string(),
            device_type: DeviceType::Sensor,
            status: DeviceStatus::Offline,
            location: Location {
                lat: 40.7282,
                lng: -73.7949,
                address: "Building D, Floor 3".to_string(),
            },
            last_seen: now - Duration::hours(1),
            firmware_version: "1.5.2".to_string(),
            battery_level: Some(12.0),
            temperature: None,
            security_level: SecurityLevel::Low,
            data_points: Vec::new(),
        },
        Device {
            id: "dev-005".to_string(),
            name: "Smart Actuator E1".to_string(),
            device_type: DeviceType::Actuator,
            status: DeviceStatus::Online,
            location: Location {
                lat: 40.7614,
                lng: -73.9776,
                address: "Building E, Floor 1".to_string(),
            },
            last_seen: now,
            firmware_version: "2.0.1".to_string(),
            battery_level: Some(92.0),
            temperature: None,
            security_level: SecurityLevel::Medium,
            data_points: Vec::new(),
        },
    ];

    for device in &mut devices {
        device.data_points = (0..METRIC_WINDOW_SIZE)
            .map(|i| DataPoint {
                timestamp: now - Duration::hours((METRIC_WINDOW_SIZE - 1 - i) as i64),
                value: rng.gen_range(0.0..100.0),
                metric: device.device_type.metric().to_string(),
            })
            .collect();
    }

    devices
}

/// One telemetry tick: returns a fresh collection with the volatile fields
/// recomputed. The previous collection is left untouched.
///
/// - `last_seen` only refreshes while the device is online
/// - battery drains monotonically toward 0, never below
/// - sensor temperature resamples in the 20-30 C band
/// - each device's data-point window gains one sample, capped at 24
pub fn tick(devices: &[Device]) -> Vec<Device> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    devices
        .iter()
        .map(|device| {
            let mut next = device.clone();

            if device.is_online() {
                next.last_seen = now;
            }

            next.battery_level = device
                .battery_level
                .map(|level| (level - rng.gen_range(0.0..0.1)).max(0.0));

            if device.device_type == DeviceType::Sensor {
                next.temperature = Some(rng.gen_range(20.0..30.0));
            }

            next.data_points = window::append_capped(
                &device.data_points,
                DataPoint {
                    timestamp: now,
                    value: rng.gen_range(0.0..100.0),
                    metric: device.device_type.metric().to_string(),
                },
                METRIC_WINDOW_SIZE,
            );

            next
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_roster() {
        let devices = seed_devices();

        assert_eq!(devices.len(), 5);
        assert_eq!(devices[0].id, "dev-001");
        assert!(devices.iter().all(|d| d.data_points.len() == METRIC_WINDOW_SIZE));

        // Ids unique within the collection
        let mut ids: Vec<_> = devices.iter().map(|d| d.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_tick_window_stays_capped() {
        let mut devices = seed_devices();
        for _ in 0..30 {
            devices = tick(&devices);
        }

        assert!(devices.iter().all(|d| d.data_points.len() <= METRIC_WINDOW_SIZE));
    }

    #[test]
    fn test_battery_drains_monotonically() {
        let mut devices = seed_devices();
        let before: Vec<Option<f64>> = devices.iter().map(|d| d.battery_level).collect();

        for _ in 0..10 {
            devices = tick(&devices);
        }

        for (device, prior) in devices.iter().zip(before) {
            match (device.battery_level, prior) {
                (Some(now), Some(then)) => {
                    assert!(now <= then);
                    assert!(now >= 0.0);
                }
                (None, None) => {}
                other => panic!("battery presence changed across ticks: {:?}", other),
            }
        }
    }

    #[test]
    fn test_last_seen_frozen_while_offline() {
        let devices = seed_devices();
        let offline_before = devices
            .iter()
            .find(|d| d.status == DeviceStatus::Offline)
            .expect("seed roster has an offline device")
            .clone();

        let ticked = tick(&devices);
        let offline_after = ticked
            .iter()
            .find(|d| d.id == offline_before.id)
            .expect("device survives the tick");

        assert_eq!(offline_after.last_seen, offline_before.last_seen);
    }

    #[test]
    fn test_tick_does_not_mutate_input() {
        let devices = seed_devices();
        let snapshot = serde_json::to_string(&devices).expect("serializable");

        let _ = tick(&devices);

        assert_eq!(serde_json::to_string(&devices).expect("serializable"), snapshot);
    }
}
