//! Audit CSV Export
//!
//! Renders the currently filtered audit subset as CSV. An empty subset is
//! not an error - the export degrades to the header row alone.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::SecondsFormat;

use super::types::AuditLog;

const HEADER: &str =
    "Timestamp,User,Action,Category,Severity,Resource,Details,IP Address,Success";

/// Render `logs` as CSV, one row per record after the header. Timestamps
/// use RFC 3339 so the column sorts lexicographically; the free-text
/// details field is double-quoted.
pub fn to_csv(logs: &[AuditLog]) -> String {
    let mut out = String::from(HEADER);

    for log in logs {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{},{},{},\"{}\",{},{}",
            log.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            log.username,
            log.action,
            log.category,
            log.severity,
            log.resource,
            log.details.replace('"', "\"\""),
            log.ip_address,
            log.success,
        ));
    }

    out
}

/// Write the CSV rendering of `logs` to `path`, truncating any existing
/// file.
pub fn write_csv(logs: &[AuditLog], path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(to_csv(logs).as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;

    log::info!("Exported {} audit log rows to {:?}", logs.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::audit::generator::seed_audit_logs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_subset_exports_header_only() {
        let csv = to_csv(&[]);
        assert_eq!(csv, HEADER);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_one_row_per_record() {
        let logs = seed_audit_logs();
        let csv = to_csv(&logs);

        assert_eq!(csv.lines().count(), logs.len() + 1);
        assert!(csv.starts_with(HEADER));
    }

    #[test]
    fn test_details_quoted_and_columns_stable() {
        let logs = seed_audit_logs();
        let csv = to_csv(&logs[..1]);
        let row = csv.lines().nth(1).expect("data row");

        assert!(row.contains("\"Successful login with 2FA\""));
        assert!(row.contains(",admin,"));
        assert!(row.contains(",authentication,"));
        assert!(row.ends_with("true"));
    }

    #[test]
    fn test_timestamps_sort_lexicographically() {
        let logs = seed_audit_logs();
        let csv = to_csv(&logs);

        let timestamps: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|row| row.split(',').next().expect("timestamp column"))
            .collect();

        // Seed logs are newest-first, so rendered timestamps descend
        assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_write_csv_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("audit-export.csv");
        let logs = seed_audit_logs();

        write_csv(&logs, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim_end(), to_csv(&logs));
    }
}
