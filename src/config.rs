//! Configuration Module
//!
//! Loads store configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::context::HeaderSet;

/// Remote strategy store configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// How long fetched strategies are cached; zero disables caching
    pub reload_interval: Duration,
    /// Headers attached to every outbound strategy fetch
    pub headers: HeaderSet,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SAMPLING_RELOAD_INTERVAL_MS` - Cache TTL in milliseconds (default: 0, caching disabled)
    /// - `SAMPLING_REMOTE_HEADERS` - Comma-separated `name=value` pairs (default: none)
    pub fn from_env() -> Self {
        Self {
            reload_interval: env::var("SAMPLING_RELOAD_INTERVAL_MS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(Duration::ZERO),
            headers: env::var("SAMPLING_REMOTE_HEADERS")
                .map(|v| HeaderSet::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Returns true if fetched strategies will be cached.
    pub fn caching_enabled(&self) -> bool {
        !self.reload_interval.is_zero()
    }
}
