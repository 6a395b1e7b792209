//! Comparative evaluation of the two simulated protocols

use crate::delay::DelayPolicy;
use crate::fixtures::FixtureStore;
use crate::netconf::NetconfSimulator;
use crate::query::QueryResult;
use crate::snmp::SnmpSimulator;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Both query results from one evaluation run. Built once, handed to the
/// report emitter, not retained afterward.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRecord {
    pub snmp: QueryResult,
    pub netconf: QueryResult,
}

#[derive(Serialize)]
struct EvaluationSummary {
    snmp_seconds: f64,
    netconf_seconds: f64,
    snmp_hit: bool,
    netconf_hit: bool,
}

impl EvaluationRecord {
    /// Sum of both per-call elapsed times. The evaluator never overlaps the
    /// two calls, so total wall time is at least this.
    pub fn combined_elapsed_secs(&self) -> f64 {
        self.snmp.elapsed_secs() + self.netconf.elapsed_secs()
    }

    fn summary(&self) -> EvaluationSummary {
        EvaluationSummary {
            snmp_seconds: self.snmp.elapsed_secs(),
            netconf_seconds: self.netconf.elapsed_secs(),
            snmp_hit: self.snmp.payload.is_hit(),
            netconf_hit: self.netconf.payload.is_hit(),
        }
    }
}

/// Runs one SNMP query and one NETCONF query, strictly in that order, and
/// collects both results. Cannot fail: both simulators always answer, with
/// a sentinel payload at worst.
pub struct ComparativeEvaluator {
    snmp: SnmpSimulator,
    netconf: NetconfSimulator,
}

impl ComparativeEvaluator {
    /// Evaluator with the production delay ranges.
    pub fn new() -> Self {
        let fixtures = Arc::new(FixtureStore::new());
        Self {
            snmp: SnmpSimulator::new(Arc::clone(&fixtures)),
            netconf: NetconfSimulator::new(fixtures),
        }
    }

    /// Evaluator with injected delay policies, for tests.
    pub fn with_delays(snmp_delay: Box<dyn DelayPolicy>, netconf_delay: Box<dyn DelayPolicy>) -> Self {
        let fixtures = Arc::new(FixtureStore::new());
        Self {
            snmp: SnmpSimulator::with_delay(Arc::clone(&fixtures), snmp_delay),
            netconf: NetconfSimulator::with_delay(fixtures, netconf_delay),
        }
    }

    pub async fn evaluate(&self, oid: &str, datastore: Option<&str>) -> EvaluationRecord {
        info!("starting SNMP vs NETCONF comparison run");
        let snmp = self.snmp.get(oid).await;
        let netconf = self.netconf.get_config(datastore).await;
        let record = EvaluationRecord { snmp, netconf };
        if let Ok(summary) = serde_json::to_string(&record.summary()) {
            info!("evaluation summary: {}", summary);
        }
        record
    }
}

impl Default for ComparativeEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
