//! Injected latency standing in for real network round-trips
//!
//! Each simulated protocol carries a delay policy instead of a hardcoded
//! sleep, so the timing behavior stays swappable in tests. The production
//! policies draw uniformly from each protocol's modeled range; NETCONF's
//! range sits strictly above SNMP's, reflecting the heavier session-based
//! protocol.

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// One simulated round-trip worth of waiting.
#[async_trait]
pub trait DelayPolicy: Send + Sync {
    async fn wait(&self);
}

/// Uniform random delay over a closed range.
#[derive(Debug, Clone)]
pub struct UniformDelay {
    min: Duration,
    max: Duration,
}

impl UniformDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        assert!(min <= max, "delay range is inverted");
        Self { min, max }
    }

    /// SNMP polling range: [0.1, 0.5] s.
    pub fn snmp() -> Self {
        Self::new(Duration::from_millis(100), Duration::from_millis(500))
    }

    /// NETCONF range: [0.5, 1.0] s.
    pub fn netconf() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(1000))
    }

    fn sample(&self) -> Duration {
        let mut rng = rand::thread_rng();
        let secs = rng.gen_range(self.min.as_secs_f64()..=self.max.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

#[async_trait]
impl DelayPolicy for UniformDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.sample()).await;
    }
}

/// Deterministic delay for tests.
#[derive(Debug, Clone)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl DelayPolicy for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_range() {
        let delay = UniformDelay::snmp();
        for _ in 0..100 {
            let d = delay.sample();
            assert!(d >= Duration::from_millis(100));
            assert!(d <= Duration::from_millis(500));
        }
    }

    #[test]
    fn test_netconf_range_strictly_heavier() {
        let snmp = UniformDelay::snmp();
        let netconf = UniformDelay::netconf();
        assert!(netconf.min >= snmp.max);
    }

    #[tokio::test]
    async fn test_fixed_delay_waits_at_least_requested() {
        let delay = FixedDelay(Duration::from_millis(5));
        let start = std::time::Instant::now();
        delay.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
