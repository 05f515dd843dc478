//! Cache Module
//!
//! Per-service caching of sampling strategy responses. Two interchangeable
//! implementations sit behind [`StrategyCache`]: a no-op cache used when
//! caching is disabled and a TTL cache.

mod entry;
mod noop;
mod stats;
mod table;
mod ttl;

#[cfg(test)]
mod property_tests;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::SamplingStrategyResponse;

// Re-export public types
pub use entry::CacheEntry;
pub use noop::NoopStrategyCache;
pub use stats::CacheStats;
pub use table::StrategyTable;
pub use ttl::TtlStrategyCache;

// == Strategy Cache Trait ==
/// Storage for strategy responses keyed by service name.
///
/// Implementations must tolerate concurrent `get` and `put` on the same or
/// different services. Neither operation can fail.
#[async_trait]
pub trait StrategyCache: Send + Sync {
    /// Returns the cached response for `service_name` if one is still valid.
    /// Never contacts the remote authority.
    async fn get(&self, service_name: &str) -> Option<SamplingStrategyResponse>;

    /// Stores `response` for `service_name`, replacing any prior entry.
    async fn put(&self, service_name: &str, response: SamplingStrategyResponse);

    /// Returns a snapshot of lookup statistics.
    async fn stats(&self) -> CacheStats;

    /// Stops background work and releases entries. Calling it again is a
    /// no-op; afterwards `get` always misses.
    async fn close(&self) -> Result<()>;
}

// == Cache Selection ==
/// Returns a TTL cache when `ttl` is non-zero, otherwise a no-op cache.
pub fn new_strategy_cache(ttl: Duration) -> Box<dyn StrategyCache> {
    if ttl.is_zero() {
        Box::new(NoopStrategyCache::new())
    } else {
        Box::new(TtlStrategyCache::new(ttl))
    }
}
