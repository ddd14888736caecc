//! Device Inventory
//!
//! Mock device collection plus the 2-second telemetry feed that keeps the
//! volatile fields (last seen, battery, temperature, data points) moving.

pub mod generator;
pub mod types;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::constants::DEVICE_TICK_INTERVAL_MS;
use crate::logic::feed::{self, FeedHandle};

pub use generator::{seed_devices, tick};
pub use types::{DataPoint, Device, DeviceStatus, DeviceType, Location, SecurityLevel};

/// Shared device collection, owned by the view that starts the feed.
pub type DeviceStore = Arc<RwLock<Vec<Device>>>;

/// Start the device telemetry feed. Each tick replaces the store's
/// collection wholesale; cancelling the returned handle stops the worker.
pub fn start_telemetry_feed(store: DeviceStore) -> FeedHandle {
    feed::spawn("device-telemetry", DEVICE_TICK_INTERVAL_MS, move || {
        let next = tick(&store.read());
        *store.write() = next;
    })
}
