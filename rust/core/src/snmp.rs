//! Simulated SNMP GET / GETBULK against the MIB fixture
//!
//! No wire encoding or transport happens here: a request is a fixture
//! lookup wrapped in an injected delay, timed the same way a real poll
//! would be.

use crate::delay::{DelayPolicy, UniformDelay};
use crate::fixtures::FixtureStore;
use crate::query::{Payload, Protocol, QueryResult};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Polling-style simulator (protocol A).
pub struct SnmpSimulator {
    fixtures: Arc<FixtureStore>,
    delay: Box<dyn DelayPolicy>,
}

/// Result of a GETBULK sweep: one tagged payload per requested OID, one
/// elapsed time for the whole exchange (single simulated request).
#[derive(Debug, Clone, Serialize)]
pub struct BulkResult {
    pub bindings: Vec<(String, Payload)>,
    pub elapsed: Duration,
}

impl SnmpSimulator {
    pub fn new(fixtures: Arc<FixtureStore>) -> Self {
        Self::with_delay(fixtures, Box::new(UniformDelay::snmp()))
    }

    pub fn with_delay(fixtures: Arc<FixtureStore>, delay: Box<dyn DelayPolicy>) -> Self {
        Self { fixtures, delay }
    }

    /// Simulated GET. Any string is accepted as an OID; a miss is a normal
    /// result, not an error.
    pub async fn get(&self, oid: &str) -> QueryResult {
        info!("SNMP GET request for OID {}", oid);
        let start = Instant::now();
        self.delay.wait().await;
        let payload = self.lookup(oid);
        let elapsed = start.elapsed();
        let result = QueryResult::new(Protocol::Snmp, payload, elapsed);
        info!(
            "SNMP GET response: {} ({:.3}s)",
            result.payload_text(),
            result.elapsed_secs()
        );
        result
    }

    /// Simulated GETBULK over a slice of OIDs. The injected delay is paid
    /// once, modeling a single bulk request.
    pub async fn get_bulk(&self, oids: &[&str]) -> BulkResult {
        info!("SNMP GETBULK request for {} OIDs", oids.len());
        let start = Instant::now();
        self.delay.wait().await;
        let bindings = oids
            .iter()
            .map(|oid| (oid.to_string(), self.lookup(oid)))
            .collect();
        let elapsed = start.elapsed();
        info!(
            "SNMP GETBULK response: {} bindings ({:.3}s)",
            oids.len(),
            elapsed.as_secs_f64()
        );
        BulkResult { bindings, elapsed }
    }

    /// Simulated walk: one GETBULK covering every OID in the fixture MIB,
    /// in walk order.
    pub async fn walk(&self) -> BulkResult {
        let oids = self.fixtures.oids();
        self.get_bulk(&oids).await
    }

    fn lookup(&self, oid: &str) -> Payload {
        match self.fixtures.mib_object(oid) {
            Some(value) => Payload::Hit(value.to_string()),
            None => Payload::Miss,
        }
    }
}
