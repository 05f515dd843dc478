//! No-op strategy cache, used when caching is disabled.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::cache::{CacheStats, StrategyCache};
use crate::error::Result;
use crate::models::SamplingStrategyResponse;

/// Cache that never stores anything; every lookup misses.
#[derive(Debug, Default)]
pub struct NoopStrategyCache {
    misses: AtomicU64,
}

impl NoopStrategyCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StrategyCache for NoopStrategyCache {
    async fn get(&self, _service_name: &str) -> Option<SamplingStrategyResponse> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    async fn put(&self, _service_name: &str, _response: SamplingStrategyResponse) {}

    async fn stats(&self) -> CacheStats {
        CacheStats {
            misses: self.misses.load(Ordering::Relaxed),
            ..CacheStats::default()
        }
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
