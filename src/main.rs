//! SecureIoT demo runner: seeds every collection, starts the live
//! feeds, and logs a dashboard snapshot every few seconds until
//! interrupted with Ctrl+C (or a fixed run length when non-interactive).

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use secureiot_core::constants::{APP_NAME, APP_VERSION};
use secureiot_core::context::AppContext;
use secureiot_core::logic::{alert, audit, device, network, query, threat};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    let ctx = AppContext::new();
    if let Err(e) = ctx.login("admin", "Aa1234567$$$") {
        log::error!("Demo login failed: {}", e);
        return;
    }

    // Seed every collection the dashboard renders
    let devices: device::DeviceStore = Arc::new(RwLock::new(device::seed_devices()));
    let alerts: alert::AlertStore = Arc::new(RwLock::new(alert::seed_alerts()));
    let audit_logs: audit::AuditStore = Arc::new(RwLock::new(audit::seed_audit_logs()));
    let threats: threat::ThreatEventStore = Arc::new(RwLock::new(threat::seed_threat_timeline()));
    let threat_metrics: threat::ThreatMetricStore =
        Arc::new(RwLock::new(threat::seed_threat_metrics()));
    let net_metrics: network::NetworkMetricStore =
        Arc::new(RwLock::new(network::seed_network_metrics()));
    let net_devices: network::NetworkDeviceStore =
        Arc::new(RwLock::new(network::seed_network_devices()));

    let feeds = vec![
        device::start_telemetry_feed(devices.clone()),
        alert::start_alert_feed(alerts.clone()),
        audit::start_audit_feed(audit_logs.clone()),
        threat::start_threat_feed(threats.clone(), threat_metrics.clone()),
        network::start_network_feed(net_metrics.clone(), net_devices.clone()),
    ];
    for feed in &feeds {
        log::info!("Feed running: {}", feed.name());
    }

    // Log a snapshot every 5 seconds for half a minute, then shut down
    for _ in 0..6 {
        std::thread::sleep(Duration::from_secs(5));

        let device_stats = query::device_stats(&devices.read());
        let alert_stats = query::alert_stats(&alerts.read());
        let audit_stats = query::audit_stats(&audit_logs.read());

        log::info!(
            "Devices: {} ({} online) | Alerts: {} ({} unresolved) | Audit entries: {} | Threats tracked: {}",
            device_stats.total,
            device_stats.online,
            alert_stats.total,
            alert_stats.unresolved,
            audit_stats.total,
            threats.read().len(),
        );
    }

    for feed in feeds {
        feed.cancel();
    }

    ctx.logout();
    log::info!("Shutdown complete");
}
