//! Settings store: the live `SystemSettings` behind a lock, updated
//! only by whole-section replacement.

use parking_lot::RwLock;

use super::types::{
    BackupSettings, GeneralSettings, IntegrationSettings, MonitoringSettings, NetworkSettings,
    NotificationSettings, SecuritySettings, SystemSettings, Theme,
};
use chrono::Utc;

pub struct SettingsStore {
    settings: RwLock<SystemSettings>,
}

impl SettingsStore {
    pub fn new() -> Self {
        SettingsStore {
            settings: RwLock::new(SystemSettings::default()),
        }
    }

    /// Clone of the current settings payload.
    pub fn snapshot(&self) -> SystemSettings {
        self.settings.read().clone()
    }

    pub fn theme(&self) -> Theme {
        self.settings.read().general.theme
    }

    pub fn update_general(&self, general: GeneralSettings) {
        log::info!("Updating general settings");
        self.settings.write().general = general;
    }

    pub fn update_security(&self, security: SecuritySettings) {
        log::info!("Updating security settings");
        self.settings.write().security = security;
    }

    pub fn update_notifications(&self, notifications: NotificationSettings) {
        log::info!("Updating notification settings");
        self.settings.write().notifications = notifications;
    }

    pub fn update_network(&self, network: NetworkSettings) {
        log::info!("Updating network settings");
        self.settings.write().network = network;
    }

    pub fn update_monitoring(&self, monitoring: MonitoringSettings) {
        log::info!("Updating monitoring settings");
        self.settings.write().monitoring = monitoring;
    }

    pub fn update_backup(&self, backup: BackupSettings) {
        log::info!("Updating backup settings");
        self.settings.write().backup = backup;
    }

    pub fn update_integration(&self, integration: IntegrationSettings) {
        log::info!("Updating integration settings");
        self.settings.write().integration = integration;
    }

    /// Record a completed backup run.
    pub fn mark_backup_completed(&self) {
        self.settings.write().backup.last_backup = Some(Utc::now());
        log::info!("Backup completed");
    }

    /// Restore the factory configuration.
    pub fn reset_to_defaults(&self) {
        log::warn!("Resetting all settings to defaults");
        *self.settings.write() = SystemSettings::default();
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_payload() {
        let store = SettingsStore::new();
        let settings = store.snapshot();

        assert_eq!(settings.general.platform_name, "SecureIoT Platform");
        assert_eq!(settings.general.theme, Theme::Dark);
        assert_eq!(settings.security.password_policy.min_length, 8);
        assert_eq!(settings.notifications.email.smtp_port, 587);
        assert_eq!(settings.network.api_rate_limit, 1_000);
        assert_eq!(settings.backup.retention_count, 7);
        assert_eq!(settings.integration.api_keys.len(), 1);
    }

    #[test]
    fn test_section_replacement_leaves_others_untouched() {
        let store = SettingsStore::new();

        let mut general = store.snapshot().general;
        general.theme = Theme::Light;
        general.session_timeout = 60;
        store.update_general(general);

        let after = store.snapshot();
        assert_eq!(after.general.theme, Theme::Light);
        assert_eq!(after.general.session_timeout, 60);
        assert_eq!(after.security, SystemSettings::default().security);
        assert_eq!(after.backup, SystemSettings::default().backup);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let store = SettingsStore::new();

        let mut security = store.snapshot().security;
        security.audit_retention = 30;
        store.update_security(security);
        store.mark_backup_completed();

        store.reset_to_defaults();
        assert_eq!(store.snapshot(), SystemSettings::default());
    }

    #[test]
    fn test_settings_round_trip_json() {
        let settings = SystemSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: SystemSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
