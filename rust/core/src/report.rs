//! Report emission
//!
//! The artifact is a fixed four-line text file, fully overwritten on each
//! run: header, SNMP payload, SNMP timing, NETCONF timing. The NETCONF
//! payload is intentionally absent from the file; downstream consumers
//! depend on this exact shape.

use crate::error::Result;
use crate::evaluator::EvaluationRecord;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Fixed output artifact path, relative to the working directory.
pub const REPORT_PATH: &str = "comparison_report.txt";

/// Format the four-line report block. Times are rendered to three decimal
/// places with a "seconds" suffix.
pub fn format_report(record: &EvaluationRecord) -> String {
    format!(
        "SNMP vs NETCONF Comparison Report\n{}\nSNMP response time: {:.3} seconds\nNETCONF response time: {:.3} seconds\n",
        record.snmp.payload_text(),
        record.snmp.elapsed_secs(),
        record.netconf.elapsed_secs(),
    )
}

/// Write the report, replacing any prior content. The file handle is
/// scoped so it is released on every exit path; I/O failures propagate to
/// the caller unrecovered.
pub async fn write_report(record: &EvaluationRecord, path: impl AsRef<Path>) -> Result<()> {
    let text = format_report(record);
    {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path.as_ref())
            .await?;
        file.write_all(text.as_bytes()).await?;
        file.flush().await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Payload, Protocol, QueryResult};
    use std::time::Duration;

    fn sample_record() -> EvaluationRecord {
        EvaluationRecord {
            snmp: QueryResult::new(
                Protocol::Snmp,
                Payload::Hit("System Uptime: 15234 seconds".to_string()),
                Duration::from_millis(234),
            ),
            netconf: QueryResult::new(
                Protocol::Netconf,
                Payload::Hit("interface GigabitEthernet0/1".to_string()),
                Duration::from_millis(789),
            ),
        }
    }

    #[test]
    fn test_report_has_exactly_four_lines() {
        let text = format_report(&sample_record());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "SNMP vs NETCONF Comparison Report");
        assert_eq!(lines[1], "System Uptime: 15234 seconds");
        assert_eq!(lines[2], "SNMP response time: 0.234 seconds");
        assert_eq!(lines[3], "NETCONF response time: 0.789 seconds");
    }

    #[test]
    fn test_netconf_payload_omitted() {
        let text = format_report(&sample_record());
        assert!(!text.contains("interface GigabitEthernet0/1"));
    }

    #[test]
    fn test_sentinel_payload_appears_verbatim() {
        let mut record = sample_record();
        record.snmp.payload = Payload::Miss;
        let text = format_report(&record);
        assert_eq!(text.lines().nth(1), Some("OID Not Found"));
    }

    #[tokio::test]
    async fn test_write_replaces_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(REPORT_PATH);

        tokio::fs::write(&path, "stale content\nwith extra lines\nleft over\nfrom before\nand more\n")
            .await
            .unwrap();
        write_report(&sample_record(), &path).await.unwrap();

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, format_report(&sample_record()));
    }

    #[tokio::test]
    async fn test_write_to_bad_path_surfaces_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join(REPORT_PATH);
        assert!(write_report(&sample_record(), &path).await.is_err());
    }
}
