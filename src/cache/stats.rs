//! Cache Statistics Module
//!
//! Tracks lookup hits, misses and sweep evictions.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time snapshot of cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of lookups answered from the cache
    pub hits: u64,
    /// Number of lookups that found nothing valid (absent or expired)
    pub misses: u64,
    /// Number of expired entries removed by the sweep
    pub evictions: u64,
    /// Current number of entries held, expired ones included until swept
    pub total_entries: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Cache Counters ==
/// Lock-free counters updated on the lookup path.
#[derive(Debug, Default)]
pub(crate) struct CacheCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl CacheCounters {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_evictions(&self, count: usize) {
        self.evictions.fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Builds a snapshot with the given entry count.
    pub(crate) fn snapshot(&self, total_entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let counters = CacheCounters::default();
        counters.record_hit();
        counters.record_hit();
        counters.record_hit();
        counters.record_miss();

        let stats = counters.snapshot(3);
        assert_eq!(stats.hit_rate(), 0.75);
        assert_eq!(stats.total_entries, 3);
    }

    #[test]
    fn test_record_evictions() {
        let counters = CacheCounters::default();
        counters.record_evictions(2);
        counters.record_evictions(0);
        counters.record_evictions(3);
        assert_eq!(counters.snapshot(0).evictions, 5);
    }
}
