//! Threat Timeline Generator
//!
//! Randomized but bounded threat events: descriptions, attack vectors and
//! mitigation actions are drawn from per-type pools so every record reads
//! plausibly for its classification.

use chrono::{Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use super::types::{ThreatEvent, ThreatMetricPoint, ThreatSeverity, ThreatStatus, ThreatType};
use crate::constants::{METRIC_WINDOW_SIZE, THREAT_WINDOW_SIZE};
use crate::logic::window;

const ALL_TYPES: &[ThreatType] = &[
    ThreatType::Malware,
    ThreatType::Intrusion,
    ThreatType::Anomaly,
    ThreatType::Ddos,
    ThreatType::DataBreach,
    ThreatType::UnauthorizedAccess,
];

const ALL_SEVERITIES: &[ThreatSeverity] = &[
    ThreatSeverity::Low,
    ThreatSeverity::Medium,
    ThreatSeverity::High,
    ThreatSeverity::Critical,
];

const ALL_STATUSES: &[ThreatStatus] = &[
    ThreatStatus::Detected,
    ThreatStatus::Investigating,
    ThreatStatus::Mitigated,
    ThreatStatus::Resolved,
];

const SOURCES: &[&str] = &[
    "External IP: 203.0.113.45",
    "Internal: 192.168.1.156",
    "Unknown Origin",
    "Compromised Device",
    "External Network",
];

const TARGETS: &[&str] = &[
    "IoT Gateway",
    "Database Server",
    "Sensor Network",
    "Admin Panel",
    "API Endpoint",
];

fn pick<'a, T>(rng: &mut impl Rng, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

fn descriptions(threat_type: ThreatType) -> &'static [&'static str] {
    match threat_type {
        ThreatType::Malware => &[
            "Suspicious executable detected in IoT device memory",
            "Potential trojan attempting to establish backdoor",
            "Ransomware signature identified in network traffic",
        ],
        ThreatType::Intrusion => &[
            "Unauthorized login attempt from foreign IP address",
            "Privilege escalation detected on admin account",
            "Suspicious lateral movement across network segments",
        ],
        ThreatType::Anomaly => &[
            "Unusual data transmission pattern detected",
            "Abnormal device behavior outside baseline parameters",
            "Unexpected communication protocol usage identified",
        ],
        ThreatType::Ddos => &[
            "Distributed denial of service attack in progress",
            "High volume of requests overwhelming gateway",
            "Coordinated botnet activity targeting infrastructure",
        ],
        ThreatType::DataBreach => &[
            "Unauthorized data exfiltration attempt detected",
            "Sensitive information accessed without authorization",
            "Database query patterns indicate potential breach",
        ],
        ThreatType::UnauthorizedAccess => &[
            "Failed authentication attempts exceeding threshold",
            "Access attempt using compromised credentials",
            "Unauthorized device attempting network connection",
        ],
    }
}

fn attack_vectors(threat_type: ThreatType) -> &'static [&'static str] {
    match threat_type {
        ThreatType::Malware => &[
            "Email Attachment",
            "USB Device",
            "Network Download",
            "Firmware Injection",
        ],
        ThreatType::Intrusion => &[
            "SSH Brute Force",
            "Web Application",
            "VPN Exploit",
            "Credential Stuffing",
        ],
        ThreatType::Anomaly => &[
            "Machine Learning Detection",
            "Behavioral Analysis",
            "Statistical Deviation",
            "Pattern Recognition",
        ],
        ThreatType::Ddos => &["UDP Flood", "SYN Flood", "HTTP Flood", "DNS Amplification"],
        ThreatType::DataBreach => &[
            "SQL Injection",
            "API Exploitation",
            "Insider Threat",
            "Privilege Abuse",
        ],
        ThreatType::UnauthorizedAccess => &[
            "Password Attack",
            "Social Engineering",
            "Physical Access",
            "Token Theft",
        ],
    }
}

fn mitigation_actions(threat_type: ThreatType) -> &'static [&'static str] {
    match threat_type {
        ThreatType::Malware => &[
            "Quarantined infected files",
            "Updated antivirus signatures",
            "Isolated affected devices",
        ],
        ThreatType::Intrusion => &[
            "Blocked source IP address",
            "Reset compromised credentials",
            "Enhanced monitoring activated",
        ],
        ThreatType::Anomaly => &[
            "Adjusted ML baseline parameters",
            "Manual investigation completed",
            "Device behavior normalized",
        ],
        ThreatType::Ddos => &[
            "Rate limiting applied",
            "Traffic filtering enabled",
            "Upstream mitigation activated",
        ],
        ThreatType::DataBreach => &[
            "Access permissions revoked",
            "Data encryption enhanced",
            "Audit trail preserved",
        ],
        ThreatType::UnauthorizedAccess => &[
            "Account locked temporarily",
            "Multi-factor auth enforced",
            "Access logs reviewed",
        ],
    }
}

/// Build the seed timeline: 15 events spread over the last 24 hours,
/// newest first.
pub fn seed_threat_timeline() -> Vec<ThreatEvent> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    let mut threats: Vec<ThreatEvent> = (0..THREAT_WINDOW_SIZE)
        .map(|i| {
            let threat_type = *pick(&mut rng, ALL_TYPES);
            let status = *pick(&mut rng, ALL_STATUSES);

            ThreatEvent {
                id: format!("threat-{}", i + 1),
                timestamp: now - Duration::seconds(rng.gen_range(0..24 * 3600)),
                threat_type,
                severity: *pick(&mut rng, ALL_SEVERITIES),
                source: pick(&mut rng, SOURCES).to_string(),
                target: pick(&mut rng, TARGETS).to_string(),
                description: pick(&mut rng, descriptions(threat_type)).to_string(),
                status,
                confidence: rng.gen_range(70..=100),
                affected_devices: rng.gen_range(1..=10),
                data_size: match threat_type {
                    ThreatType::DataBreach => Some(format!("{} MB", rng.gen_range(50..550))),
                    _ => None,
                },
                attack_vector: Some(pick(&mut rng, attack_vectors(threat_type)).to_string()),
                mitigation_action: if status.is_handled() {
                    Some(pick(&mut rng, mitigation_actions(threat_type)).to_string())
                } else {
                    None
                },
            }
        })
        .collect();

    threats.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    threats
}

/// Build the seed metric history: 24 hourly samples, newest first.
pub fn seed_threat_metrics() -> Vec<ThreatMetricPoint> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    (0..METRIC_WINDOW_SIZE)
        .map(|i| sample_metric_point(&mut rng, now - Duration::hours(i as i64)))
        .collect()
}

/// One feed tick over the event timeline: ~30 % of ticks surface a freshly
/// detected threat at the head, keeping the window at 15. The remaining
/// ticks return an unchanged copy.
pub fn tick_events(events: &[ThreatEvent]) -> Vec<ThreatEvent> {
    let mut rng = rand::thread_rng();

    if rng.gen_range(0.0..1.0) >= 0.3 {
        return events.to_vec();
    }

    let live_types = [
        ThreatType::Anomaly,
        ThreatType::Intrusion,
        ThreatType::UnauthorizedAccess,
    ];
    let live_severities = [ThreatSeverity::Low, ThreatSeverity::Medium, ThreatSeverity::High];
    let threat_type = *pick(&mut rng, &live_types);

    let new_threat = ThreatEvent {
        id: format!("threat-{}", Uuid::new_v4()),
        timestamp: Utc::now(),
        threat_type,
        severity: *pick(&mut rng, &live_severities),
        source: "Real-time Detection".to_string(),
        target: "IoT Network".to_string(),
        description: "Automated threat detection identified suspicious activity".to_string(),
        status: ThreatStatus::Detected,
        confidence: rng.gen_range(80..=100),
        affected_devices: rng.gen_range(1..=3),
        data_size: None,
        attack_vector: None,
        mitigation_action: None,
    };

    window::prepend_capped(events, new_threat, THREAT_WINDOW_SIZE)
}

/// One feed tick over the metric history: push a fresh sample, cap at 24.
pub fn tick_metrics(metrics: &[ThreatMetricPoint]) -> Vec<ThreatMetricPoint> {
    let mut rng = rand::thread_rng();
    let point = sample_metric_point(&mut rng, Utc::now());
    window::prepend_capped(metrics, point, METRIC_WINDOW_SIZE)
}

fn sample_metric_point(
    rng: &mut impl Rng,
    timestamp: chrono::DateTime<Utc>,
) -> ThreatMetricPoint {
    ThreatMetricPoint {
        timestamp,
        threats_detected: rng.gen_range(5..25),
        threats_blocked: rng.gen_range(3..18),
        risk_score: rng.gen_range(30..70),
        ml_accuracy: rng.gen_range(90..=100),
        false_positives: rng.gen_range(0..3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_timeline_shape() {
        let threats = seed_threat_timeline();

        assert_eq!(threats.len(), THREAT_WINDOW_SIZE);
        assert!(threats.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

        for threat in &threats {
            assert!((70..=100).contains(&threat.confidence));
            // Mitigation details only for handled threats
            assert_eq!(threat.mitigation_action.is_some(), threat.status.is_handled());
            assert_eq!(
                threat.data_size.is_some(),
                threat.threat_type == ThreatType::DataBreach
            );
        }
    }

    #[test]
    fn test_event_window_never_exceeds_cap() {
        let mut events = seed_threat_timeline();
        for _ in 0..50 {
            events = tick_events(&events);
            assert!(events.len() <= THREAT_WINDOW_SIZE);
        }
    }

    #[test]
    fn test_metric_window_never_exceeds_cap() {
        let mut metrics = seed_threat_metrics();
        for _ in 0..40 {
            metrics = tick_metrics(&metrics);
        }

        assert_eq!(metrics.len(), METRIC_WINDOW_SIZE);
        // Newest sample sits at the head
        assert!(metrics[0].timestamp >= metrics[1].timestamp);
    }

    #[test]
    fn test_metric_ranges() {
        let metrics = seed_threat_metrics();
        for point in &metrics {
            assert!((5..25).contains(&point.threats_detected));
            assert!((3..18).contains(&point.threats_blocked));
            assert!((30..70).contains(&point.risk_score));
            assert!((90..=100).contains(&point.ml_accuracy));
            assert!(point.false_positives < 3);
        }
    }
}
