//! Query results shared by both simulated protocols

use serde::Serialize;
use std::time::Duration;

/// Protocol identifier carried on every result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Protocol {
    /// Polling-style query protocol (SNMP GET)
    Snmp,
    /// Configuration-retrieval protocol (NETCONF get-config)
    Netconf,
}

impl Protocol {
    /// Label used in logs and the report file.
    pub fn label(&self) -> &'static str {
        match self {
            Protocol::Snmp => "SNMP",
            Protocol::Netconf => "NETCONF",
        }
    }

    /// Sentinel string substituted for a fixture miss. SNMP answers with a
    /// plain marker; NETCONF answers with an error-shaped element, matching
    /// that protocol's structured-error convention.
    pub fn miss_sentinel(&self) -> &'static str {
        match self {
            Protocol::Snmp => "OID Not Found",
            Protocol::Netconf => "<error>Datastore not found</error>",
        }
    }
}

/// Outcome of a fixture lookup.
///
/// Kept tagged until the formatting boundary so hit/miss logic is testable
/// without the literal sentinel strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Payload {
    Hit(String),
    Miss,
}

impl Payload {
    pub fn is_hit(&self) -> bool {
        matches!(self, Payload::Hit(_))
    }

    /// Render to the response string, substituting the sentinel on a miss.
    pub fn render(&self, sentinel: &str) -> String {
        match self {
            Payload::Hit(value) => value.clone(),
            Payload::Miss => sentinel.to_string(),
        }
    }
}

/// Result of one simulated call: the payload plus the wall-clock time spent
/// in that call only (injected delay + lookup).
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub protocol: Protocol,
    pub payload: Payload,
    pub elapsed: Duration,
}

impl QueryResult {
    pub fn new(protocol: Protocol, payload: Payload, elapsed: Duration) -> Self {
        Self {
            protocol,
            payload,
            elapsed,
        }
    }

    /// Response string as it appears in logs and the report.
    pub fn payload_text(&self) -> String {
        self.payload.render(self.protocol.miss_sentinel())
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hit_ignores_sentinel() {
        let payload = Payload::Hit("System Uptime: 15234 seconds".to_string());
        assert!(payload.is_hit());
        assert_eq!(
            payload.render(Protocol::Snmp.miss_sentinel()),
            "System Uptime: 15234 seconds"
        );
    }

    #[test]
    fn test_render_miss_per_protocol() {
        assert_eq!(Payload::Miss.render(Protocol::Snmp.miss_sentinel()), "OID Not Found");
        assert_eq!(
            Payload::Miss.render(Protocol::Netconf.miss_sentinel()),
            "<error>Datastore not found</error>"
        );
    }

    #[test]
    fn test_result_text_and_secs() {
        let result = QueryResult::new(Protocol::Netconf, Payload::Miss, Duration::from_millis(750));
        assert_eq!(result.payload_text(), "<error>Datastore not found</error>");
        assert!((result.elapsed_secs() - 0.75).abs() < 1e-9);
        assert_eq!(result.protocol.label(), "NETCONF");
    }
}
