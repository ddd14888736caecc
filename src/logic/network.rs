//! Network Activity
//!
//! The dashboard's network picture: a 24-point rolling window of traffic
//! metrics sampled on 5-minute buckets, plus the tracked network devices
//! whose counters only move while they are active.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{FEED_TICK_INTERVAL_MS, METRIC_WINDOW_SIZE};
use crate::logic::feed::{self, FeedHandle};
use crate::logic::window;

// ============================================================================
// TYPES
// ============================================================================

/// One sample of aggregate network traffic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkMetric {
    pub timestamp: DateTime<Utc>,
    /// 20-120 Mbps
    pub inbound: f64,
    /// 10-90 Mbps
    pub outbound: f64,
    /// 10-60 ms
    pub latency: f64,
    /// 0-2 %
    pub packet_loss: f64,
    /// 20-70
    pub active_connections: u32,
}

/// Link state of a tracked network device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetStatus {
    Active,
    Idle,
    Disconnected,
}

impl NetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetStatus::Active => "active",
            NetStatus::Idle => "idle",
            NetStatus::Disconnected => "disconnected",
        }
    }
}

impl std::fmt::Display for NetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A piece of network infrastructure tracked on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDevice {
    pub id: String,
    pub name: String,
    pub ip: String,
    pub status: NetStatus,
    pub bandwidth: f64,
    pub packets: u64,
    pub last_activity: DateTime<Utc>,
}

// ============================================================================
// GENERATORS
// ============================================================================

fn sample_metric(rng: &mut impl Rng, timestamp: DateTime<Utc>) -> NetworkMetric {
    NetworkMetric {
        timestamp,
        inbound: rng.gen_range(20.0..120.0),
        outbound: rng.gen_range(10.0..90.0),
        latency: rng.gen_range(10.0..60.0),
        packet_loss: rng.gen_range(0.0..2.0),
        active_connections: rng.gen_range(20..70),
    }
}

/// Build the seed metric window: 24 samples on 5-minute buckets, oldest
/// first.
pub fn seed_network_metrics() -> Vec<NetworkMetric> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    (0..METRIC_WINDOW_SIZE)
        .map(|i| {
            let offset = (METRIC_WINDOW_SIZE - 1 - i) as i64;
            sample_metric(&mut rng, now - Duration::minutes(offset * 5))
        })
        .collect()
}

/// Build the tracked device roster.
pub fn seed_network_devices() -> Vec<NetworkDevice> {
    let now = Utc::now();

    vec![
        NetworkDevice {
            id: "net-001".to_string(),
            name: "Main Gateway".to_string(),
            ip: "192.168.1.1".to_string(),
            status: NetStatus::Active,
            bandwidth: 87.3,
            packets: 15_420,
            last_activity: now,
        },
        NetworkDevice {
            id: "net-002".to_string(),
            name: "IoT Hub Alpha".to_string(),
            ip: "192.168.1.10".to_string(),
            status: NetStatus::Active,
            bandwidth: 42.1,
            packets: 8_932,
            last_activity: now - Duration::seconds(30),
        },
        NetworkDevice {
            id: "net-003".to_string(),
            name: "Security Bridge".to_string(),
            ip: "192.168.1.15".to_string(),
            status: NetStatus::Idle,
            bandwidth: 12.7,
            packets: 2_341,
            last_activity: now - Duration::minutes(2),
        },
        NetworkDevice {
            id: "net-004".to_string(),
            name: "Sensor Network".to_string(),
            ip: "192.168.1.20".to_string(),
            status: NetStatus::Active,
            bandwidth: 28.9,
            packets: 5_672,
            last_activity: now - Duration::seconds(15),
        },
        NetworkDevice {
            id: "net-005".to_string(),
            name: "Backup Router".to_string(),
            ip: "192.168.1.5".to_string(),
            status: NetStatus::Disconnected,
            bandwidth: 0.0,
            packets: 0,
            last_activity: now - Duration::hours(1),
        },
    ]
}

/// One tick over the metric window: append a fresh sample, cap at 24.
pub fn tick_metrics(metrics: &[NetworkMetric]) -> Vec<NetworkMetric> {
    let mut rng = rand::thread_rng();
    let sample = sample_metric(&mut rng, Utc::now());
    window::append_capped(metrics, sample, METRIC_WINDOW_SIZE)
}

/// One tick over the device roster. Only active devices move: bandwidth
/// resamples, the packet counter grows, last activity refreshes. Idle and
/// disconnected devices decay their bandwidth and keep everything else.
pub fn tick_devices(devices: &[NetworkDevice]) -> Vec<NetworkDevice> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    devices
        .iter()
        .map(|device| {
            let mut next = device.clone();
            if device.status == NetStatus::Active {
                next.bandwidth = rng.gen_range(0.0..100.0);
                next.packets = device.packets + rng.gen_range(0..100);
                next.last_activity = now;
            } else {
                next.bandwidth = device.bandwidth * 0.9;
            }
            next
        })
        .collect()
}

// ============================================================================
// FEED
// ============================================================================

pub type NetworkMetricStore = Arc<RwLock<Vec<NetworkMetric>>>;
pub type NetworkDeviceStore = Arc<RwLock<Vec<NetworkDevice>>>;

/// Start the dashboard network feed. The dashboard owns both collections,
/// so one 30-second worker drives them together.
pub fn start_network_feed(
    metrics: NetworkMetricStore,
    devices: NetworkDeviceStore,
) -> FeedHandle {
    feed::spawn("network-activity", FEED_TICK_INTERVAL_MS, move || {
        let next_metrics = tick_metrics(&metrics.read());
        *metrics.write() = next_metrics;

        let next_devices = tick_devices(&devices.read());
        *devices.write() = next_devices;
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_metrics_shape() {
        let metrics = seed_network_metrics();

        assert_eq!(metrics.len(), METRIC_WINDOW_SIZE);
        assert!(metrics.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

        for point in &metrics {
            assert!((20.0..120.0).contains(&point.inbound));
            assert!((10.0..90.0).contains(&point.outbound));
            assert!((10.0..60.0).contains(&point.latency));
            assert!((0.0..2.0).contains(&point.packet_loss));
            assert!((20..70).contains(&point.active_connections));
        }
    }

    #[test]
    fn test_metric_window_evicts_oldest_after_25_ticks() {
        let seed = seed_network_metrics();
        let oldest = seed[0].timestamp;

        let mut metrics = seed;
        for _ in 0..25 {
            metrics = tick_metrics(&metrics);
        }

        assert_eq!(metrics.len(), METRIC_WINDOW_SIZE);
        assert!(metrics.iter().all(|m| m.timestamp != oldest));
    }

    #[test]
    fn test_inactive_devices_keep_their_counters() {
        let devices = seed_network_devices();
        let ticked = tick_devices(&devices);

        for (after, before) in ticked.iter().zip(devices.iter()) {
            match before.status {
                NetStatus::Active => {
                    assert!(after.packets >= before.packets);
                    assert!(after.last_activity >= before.last_activity);
                }
                NetStatus::Idle | NetStatus::Disconnected => {
                    assert_eq!(after.packets, before.packets);
                    assert_eq!(after.last_activity, before.last_activity);
                    assert!(after.bandwidth <= before.bandwidth);
                }
            }
        }
    }
}
