//! System Settings
//!
//! The fully-typed platform configuration payload and the store that
//! holds the live copy. Edits replace one top-level section at a time.

mod store;
mod types;

pub use store::SettingsStore;
pub use types::{
    ApiKey, BackupFrequency, BackupSettings, EmailSettings, EmailTemplates, EncryptionSettings,
    GeneralSettings, IntegrationSettings, LogLevel, MonitoringSettings, NetworkSettings,
    NotificationSettings, PasswordPolicy, PushSettings, QuietHours, SecuritySettings,
    SmsSettings, SmtpSecurity, SslCertificate, SystemSettings, Theme, ThirdPartyService,
    TwoFactorAuth, Webhook,
};
