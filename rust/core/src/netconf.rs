//! Simulated NETCONF get-config against the datastore fixture
//!
//! Same shape as the SNMP simulator, but with the heavier delay range and
//! an error-shaped miss sentinel, matching NETCONF's structured-error
//! convention.

use crate::delay::{DelayPolicy, UniformDelay};
use crate::fixtures::{FixtureStore, DEFAULT_DATASTORE};
use crate::query::{Payload, Protocol, QueryResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Configuration-retrieval simulator (protocol B).
pub struct NetconfSimulator {
    fixtures: Arc<FixtureStore>,
    delay: Box<dyn DelayPolicy>,
}

impl NetconfSimulator {
    pub fn new(fixtures: Arc<FixtureStore>) -> Self {
        Self::with_delay(fixtures, Box::new(UniformDelay::netconf()))
    }

    pub fn with_delay(fixtures: Arc<FixtureStore>, delay: Box<dyn DelayPolicy>) -> Self {
        Self { fixtures, delay }
    }

    /// Simulated get-config. `None` retrieves the conventional default
    /// datastore; a missing datastore is a normal result, not an error.
    pub async fn get_config(&self, datastore: Option<&str>) -> QueryResult {
        let source = datastore.unwrap_or(DEFAULT_DATASTORE);
        info!("NETCONF get-config request for datastore {}", source);
        let start = Instant::now();
        self.delay.wait().await;
        let payload = match self.fixtures.datastore(source) {
            Some(config) => Payload::Hit(config.to_string()),
            None => Payload::Miss,
        };
        let elapsed = start.elapsed();
        let result = QueryResult::new(Protocol::Netconf, payload, elapsed);
        info!(
            "NETCONF get-config response: {} bytes ({:.3}s)",
            result.payload_text().len(),
            result.elapsed_secs()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::FixedDelay;
    use std::time::Duration;

    fn test_simulator() -> NetconfSimulator {
        NetconfSimulator::with_delay(
            Arc::new(FixtureStore::new()),
            Box::new(FixedDelay(Duration::from_millis(1))),
        )
    }

    #[tokio::test]
    async fn test_get_config_defaults_to_running() {
        let netconf = test_simulator();
        let result = netconf.get_config(None).await;
        assert_eq!(result.protocol, Protocol::Netconf);
        assert!(result.payload.is_hit());
        assert!(result.payload_text().contains("GigabitEthernet0/1"));
        assert!(result.elapsed > Duration::ZERO);
    }

    #[tokio::test]
    async fn test_get_config_named_datastore() {
        let netconf = test_simulator();
        let result = netconf.get_config(Some("startup-config")).await;
        assert!(result.payload.is_hit());
    }

    #[tokio::test]
    async fn test_get_config_missing_datastore_returns_error_shape() {
        let netconf = test_simulator();
        let result = netconf.get_config(Some("nonexistent")).await;
        assert_eq!(result.payload, Payload::Miss);
        assert_eq!(result.payload_text(), "<error>Datastore not found</error>");
    }
}
