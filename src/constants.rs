//! Central Configuration Constants
//!
//! Single source of truth for feed cadences and window caps.
//! The cadences are deliberately fixed - the simulated feeds are not
//! runtime-configurable.

/// Device telemetry tick interval (milliseconds)
pub const DEVICE_TICK_INTERVAL_MS: u64 = 2_000;

/// Alert / audit / network / threat feed tick interval (milliseconds)
pub const FEED_TICK_INTERVAL_MS: u64 = 30_000;

/// Rolling window size for network metrics, device data points and
/// threat metric history
pub const METRIC_WINDOW_SIZE: usize = 24;

/// Rolling window size for the recent threat timeline
pub const THREAT_WINDOW_SIZE: usize = 15;

/// Wall-clock window for "recent" counts in list stats (hours)
pub const RECENT_WINDOW_HOURS: i64 = 24;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "SecureIoT Platform";
