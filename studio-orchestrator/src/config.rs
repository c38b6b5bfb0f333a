//! Orchestrator configuration
//!
//! Defines all configurable parameters for the orchestrator including the
//! bind address and the pacing of the execution simulator.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Orchestrator configuration
///
/// The tick interval is a presentation-pacing constant, not a correctness
/// value; it is configurable to allow faster pacing in dev setups.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (e.g. "0.0.0.0:8080")
    pub bind_addr: String,

    /// How often an executing pipeline advances by one stage
    pub tick_interval: Duration,

    /// Range the synthetic stage durations are sampled from, in milliseconds
    pub stage_duration_ms: RangeInclusive<u64>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            tick_interval: Duration::from_secs(3),
            stage_duration_ms: 1000..=4000,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables (all optional):
    /// - STUDIO_BIND_ADDR (default: "0.0.0.0:8080")
    /// - TICK_INTERVAL_MS (default: 3000)
    /// - STAGE_DURATION_MIN_MS (default: 1000)
    /// - STAGE_DURATION_MAX_MS (default: 4000)
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::new();

        let bind_addr =
            std::env::var("STUDIO_BIND_ADDR").unwrap_or_else(|_| defaults.bind_addr.clone());

        let tick_interval = std::env::var("TICK_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);

        let min_ms = std::env::var("STAGE_DURATION_MIN_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(*defaults.stage_duration_ms.start());

        let max_ms = std::env::var("STAGE_DURATION_MAX_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(*defaults.stage_duration_ms.end());

        let config = Self {
            bind_addr,
            tick_interval,
            stage_duration_ms: min_ms..=max_ms,
        };

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.tick_interval.is_zero() {
            anyhow::bail!("tick_interval must be greater than 0");
        }

        if self.stage_duration_ms.is_empty() {
            anyhow::bail!(
                "stage duration range is empty ({}..={})",
                self.stage_duration_ms.start(),
                self.stage_duration_ms.end()
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
