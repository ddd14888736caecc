//! Threat Detection Timeline
//!
//! Simulated threat events and hourly detection metrics for the security
//! panel, with the 30-second feed that occasionally surfaces a new threat
//! and always appends a metric sample.

pub mod timeline;
pub mod types;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::constants::FEED_TICK_INTERVAL_MS;
use crate::logic::feed::{self, FeedHandle};

pub use timeline::{seed_threat_metrics, seed_threat_timeline, tick_events, tick_metrics};
pub use types::{ThreatEvent, ThreatMetricPoint, ThreatSeverity, ThreatStatus, ThreatType};

pub type ThreatEventStore = Arc<RwLock<Vec<ThreatEvent>>>;
pub type ThreatMetricStore = Arc<RwLock<Vec<ThreatMetricPoint>>>;

/// Start the threat detection feed. The security panel owns both
/// collections, so one worker drives them in lockstep.
pub fn start_threat_feed(events: ThreatEventStore, metrics: ThreatMetricStore) -> FeedHandle {
    feed::spawn("threat-detection", FEED_TICK_INTERVAL_MS, move || {
        let next_events = tick_events(&events.read());
        *events.write() = next_events;

        let next_metrics = tick_metrics(&metrics.read());
        *metrics.write() = next_metrics;
    })
}
