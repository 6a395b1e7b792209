//! SNMP vs NETCONF Simulation - Core Module
//!
//! This crate simulates the response-time behavior of a polling-style
//! protocol (SNMP) and a configuration-retrieval protocol (NETCONF)
//! against static fixture data. There is no real network I/O: requests
//! resolve against in-memory tables and latency is injected per protocol.

pub mod analysis;
pub mod delay;
pub mod error;
pub mod evaluator;
pub mod fixtures;
pub mod netconf;
pub mod query;
pub mod report;
pub mod snmp;

pub use error::{Result, SimError};

/// Re-export common types
pub mod prelude {
    pub use crate::delay::{DelayPolicy, FixedDelay, UniformDelay};
    pub use crate::error::{Result, SimError};
    pub use crate::evaluator::{ComparativeEvaluator, EvaluationRecord};
    pub use crate::fixtures::{FixtureStore, DEFAULT_DATASTORE, DEFAULT_OID};
    pub use crate::netconf::NetconfSimulator;
    pub use crate::query::{Payload, Protocol, QueryResult};
    pub use crate::report::{format_report, write_report, REPORT_PATH};
    pub use crate::snmp::SnmpSimulator;
}

/// Current version of the simulation core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
