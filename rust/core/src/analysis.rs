//! Comparative scoring models carried alongside the timing run
//!
//! Pure functions, no simulation state. The weights mirror the published
//! protocol comparison this tool reproduces: CIA-triad security weighting
//! plus transport/session bonuses, and a weighted operation/structure/
//! syntax complexity metric.

use serde::Serialize;

/// Latency = network delay + processing time + serialization time, where
/// serialization is approximated as message_size / 1000.
pub fn latency_model(message_size: usize, network_delay: f64, processing_time: f64) -> f64 {
    let serialization_time = message_size as f64 / 1000.0;
    network_delay + processing_time + serialization_time
}

/// CIA-triad base score: 0.4 confidentiality, 0.3 integrity, 0.3
/// authorization.
pub fn security_score(encryption: bool, authentication: bool, authorization: bool) -> f64 {
    let mut score = 0.0;
    if encryption {
        score += 0.4;
    }
    if authentication {
        score += 0.3;
    }
    if authorization {
        score += 0.3;
    }
    score
}

/// Weighted complexity: operations 0.4, data structures 0.3, syntax
/// elements 0.3.
pub fn complexity_metric(operations: u32, data_structures: u32, syntax_elements: u32) -> f64 {
    f64::from(operations) * 0.4 + f64::from(data_structures) * 0.3 + f64::from(syntax_elements) * 0.3
}

/// Security feature set of one protocol.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityProfile {
    pub encryption: bool,
    pub authentication: bool,
    pub authorization: bool,
    pub transport_security: bool,
    pub session_management: bool,
}

impl SecurityProfile {
    /// SNMPv3 with USM/VACM: strong application-layer security, but
    /// UDP-based and stateless.
    pub fn snmp() -> Self {
        Self {
            encryption: true,
            authentication: true,
            authorization: true,
            transport_security: false,
            session_management: false,
        }
    }

    /// NETCONF over SSH/TLS: mandatory transport security, stateful
    /// sessions.
    pub fn netconf() -> Self {
        Self {
            encryption: true,
            authentication: true,
            authorization: true,
            transport_security: true,
            session_management: true,
        }
    }

    /// CIA base score plus +0.1 each for transport security and session
    /// management.
    pub fn score(&self) -> f64 {
        let mut score = security_score(self.encryption, self.authentication, self.authorization);
        if self.transport_security {
            score += 0.1;
        }
        if self.session_management {
            score += 0.1;
        }
        score
    }
}

/// SNMP: 7 operations, 3 data structures, 5 ASN.1 BER syntax elements.
pub fn snmp_complexity() -> f64 {
    complexity_metric(7, 3, 5)
}

/// NETCONF: 12 operations, 4 data structures, 8 XML/XPath syntax elements.
pub fn netconf_complexity() -> f64 {
    complexity_metric(12, 4, 8)
}

/// Fleet sizes swept by the scalability comparison.
pub const DEVICE_COUNTS: [u32; 5] = [10, 50, 100, 500, 1000];

/// Modeled latency per fleet size for one protocol.
#[derive(Debug, Clone, Serialize)]
pub struct ScalabilityCurve {
    pub device_counts: Vec<u32>,
    pub latencies: Vec<f64>,
}

fn scalability_curve(
    device_counts: &[u32],
    bytes_per_device: usize,
    delay_per_device: f64,
    processing_per_device: f64,
) -> ScalabilityCurve {
    let latencies = device_counts
        .iter()
        .map(|&n| {
            latency_model(
                bytes_per_device * n as usize,
                delay_per_device * f64::from(n),
                processing_per_device * f64::from(n),
            )
        })
        .collect();
    ScalabilityCurve {
        device_counts: device_counts.to_vec(),
        latencies,
    }
}

/// SNMP scaling: compact per-OID messages (200 B/device), light
/// processing.
pub fn snmp_scalability(device_counts: &[u32]) -> ScalabilityCurve {
    scalability_curve(device_counts, 200, 0.001, 0.0001)
}

/// NETCONF scaling: XML overhead (800 B/device), heavier parsing.
pub fn netconf_scalability(device_counts: &[u32]) -> ScalabilityCurve {
    scalability_curve(device_counts, 800, 0.001, 0.0005)
}
