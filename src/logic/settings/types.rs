//! Platform settings payload. `SystemSettings::default()` is the
//! factory configuration the reset operation restores.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// GENERAL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Dark,
    Light,
    Auto,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Auto => "auto",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub platform_name: String,
    pub timezone: String,
    pub language: String,
    pub date_format: String,
    pub theme: Theme,
    /// minutes
    pub session_timeout: u32,
    pub max_login_attempts: u32,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        GeneralSettings {
            platform_name: "SecureIoT Platform".to_string(),
            timezone: "America/New_York".to_string(),
            language: "en".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            theme: Theme::Dark,
            session_timeout: 30,
            max_login_attempts: 5,
        }
    }
}

// ============================================================================
// SECURITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    pub min_length: u32,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_numbers: bool,
    pub require_special_chars: bool,
    /// days
    pub password_expiry: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoFactorAuth {
    pub enforced: bool,
    pub methods: Vec<String>,
    pub backup_codes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncryptionSettings {
    pub algorithm: String,
    pub key_length: u32,
    /// days
    pub rotation_interval: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub password_policy: PasswordPolicy,
    pub two_factor_auth: TwoFactorAuth,
    pub encryption: EncryptionSettings,
    /// days
    pub audit_retention: u32,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        SecuritySettings {
            password_policy: PasswordPolicy {
                min_length: 8,
                require_uppercase: true,
                require_lowercase: true,
                require_numbers: true,
                require_special_chars: true,
                password_expiry: 90,
            },
            two_factor_auth: TwoFactorAuth {
                enforced: false,
                methods: vec!["authenticator".to_string(), "sms".to_string()],
                backup_codes: true,
            },
            encryption: EncryptionSettings {
                algorithm: "AES-256".to_string(),
                key_length: 256,
                rotation_interval: 365,
            },
            audit_retention: 365,
        }
    }
}

// ============================================================================
// NOTIFICATIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmtpSecurity {
    None,
    Tls,
    Ssl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailTemplates {
    pub alerts: bool,
    pub reports: bool,
    pub maintenance: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailSettings {
    pub enabled: bool,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_security: SmtpSecurity,
    pub sender_email: String,
    pub sender_name: String,
    pub templates: EmailTemplates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuietHours {
    pub enabled: bool,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushSettings {
    pub enabled: bool,
    pub urgent_only: bool,
    pub quiet_hours: QuietHours,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsSettings {
    pub enabled: bool,
    pub provider: String,
    pub critical_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: EmailSettings,
    pub push: PushSettings,
    pub sms: SmsSettings,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            email: EmailSettings {
                enabled: true,
                smtp_server: "smtp.secureiot.com".to_string(),
                smtp_port: 587,
                smtp_security: SmtpSecurity::Tls,
                sender_email: "noreply@secureiot.com".to_string(),
                sender_name: "SecureIoT Platform".to_string(),
                templates: EmailTemplates {
                    alerts: true,
                    reports: true,
                    maintenance: false,
                },
            },
            push: PushSettings {
                enabled: true,
                urgent_only: false,
                quiet_hours: QuietHours {
                    enabled: true,
                    start_time: "22:00".to_string(),
                    end_time: "08:00".to_string(),
                },
            },
            sms: SmsSettings {
                enabled: false,
                provider: "twilio".to_string(),
                critical_only: true,
            },
        }
    }
}

// ============================================================================
// NETWORK / MONITORING / BACKUP
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SslCertificate {
    pub issuer: String,
    pub expiry_date: DateTime<Utc>,
    pub auto_renewal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSettings {
    pub api_rate_limit: u32,
    pub max_concurrent_connections: u32,
    pub allowed_ip_ranges: Vec<String>,
    pub blocked_ip_addresses: Vec<String>,
    pub ssl_certificate: SslCertificate,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        NetworkSettings {
            api_rate_limit: 1_000,
            max_concurrent_connections: 500,
            allowed_ip_ranges: vec!["10.0.0.0/8".to_string(), "192.168.0.0/16".to_string()],
            blocked_ip_addresses: Vec::new(),
            ssl_certificate: SslCertificate {
                issuer: "Let's Encrypt".to_string(),
                expiry_date: Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
                auto_renewal: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringSettings {
    /// seconds
    pub health_check_interval: u32,
    pub performance_metrics: bool,
    pub resource_usage_alerts: bool,
    pub log_level: LogLevel,
    /// days
    pub retention_period: u32,
}

impl Default for MonitoringSettings {
    fn default() -> Self {
        MonitoringSettings {
            health_check_interval: 30,
            performance_metrics: true,
            resource_usage_alerts: true,
            log_level: LogLevel::Info,
            retention_period: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupFrequency {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupSettings {
    pub enabled: bool,
    pub frequency: BackupFrequency,
    pub retention_count: u32,
    pub location: String,
    pub encryption: bool,
    pub last_backup: Option<DateTime<Utc>>,
}

impl Default for BackupSettings {
    fn default() -> Self {
        BackupSettings {
            enabled: true,
            frequency: BackupFrequency::Daily,
            retention_count: 7,
            location: "/var/backups/secureiot".to_string(),
            encryption: true,
            last_backup: Some(Utc.with_ymd_and_hms(2024, 1, 15, 3, 0, 0).unwrap()),
        }
    }
}

// ============================================================================
// INTEGRATIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub name: String,
    pub key: String,
    pub permissions: Vec<String>,
    pub last_used: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub url: String,
    pub events: Vec<String>,
    pub enabled: bool,
    pub secret: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThirdPartyService {
    pub name: String,
    pub enabled: bool,
    pub config: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationSettings {
    pub api_keys: Vec<ApiKey>,
    pub webhooks: Vec<Webhook>,
    pub third_party_services: Vec<ThirdPartyService>,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        IntegrationSettings {
            api_keys: vec![ApiKey {
                name: "Dashboard API".to_string(),
                key: "sk_live_...".to_string(),
                permissions: vec!["read".to_string(), "write".to_string()],
                last_used: Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()),
            }],
            webhooks: vec![Webhook {
                url: "https://external-service.com/webhook".to_string(),
                events: vec![
                    "device.connected".to_string(),
                    "alert.created".to_string(),
                ],
                enabled: true,
                secret: Some("whsec_...".to_string()),
            }],
            third_party_services: vec![ThirdPartyService {
                name: "AWS IoT Core".to_string(),
                enabled: false,
                config: Value::Object(Default::default()),
            }],
        }
    }
}

// ============================================================================
// ROOT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemSettings {
    pub general: GeneralSettings,
    pub security: SecuritySettings,
    pub notifications: NotificationSettings,
    pub network: NetworkSettings,
    pub monitoring: MonitoringSettings,
    pub backup: BackupSettings,
    pub integration: IntegrationSettings,
}
