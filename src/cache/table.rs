//! Strategy Table Module
//!
//! Shared per-service storage behind the TTL cache, guarded by a
//! reader/writer lock so lookups for different services run in parallel.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::cache::stats::CacheCounters;
use crate::cache::{CacheEntry, CacheStats};
use crate::models::SamplingStrategyResponse;

// == Strategy Table ==
/// Service name to cached entry mapping plus lookup counters.
#[derive(Debug, Default)]
pub struct StrategyTable {
    /// Per-service entries
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Hit/miss/eviction counters
    counters: CacheCounters,
}

impl StrategyTable {
    // == Constructor ==
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    // == Lookup ==
    /// Returns the entry for `service_name` if it is still valid at `now`.
    ///
    /// Expired entries are left in place for the sweep and reported as misses.
    pub async fn lookup(
        &self,
        service_name: &str,
        now: Instant,
    ) -> Option<SamplingStrategyResponse> {
        let entries = self.entries.read().await;
        let found = entries
            .get(service_name)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.value.clone());

        if found.is_some() {
            self.counters.record_hit();
        } else {
            self.counters.record_miss();
        }
        found
    }

    // == Insert ==
    /// Stores `entry` under `service_name`, replacing any prior entry.
    pub async fn insert(&self, service_name: String, entry: CacheEntry) {
        self.entries.write().await.insert(service_name, entry);
    }

    // == Purge Expired ==
    /// Removes all entries expired at `now`.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self, now: Instant) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - entries.len();

        self.counters.record_evictions(removed);
        removed
    }

    // == Clear ==
    /// Drops every entry.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    // == Length ==
    /// Returns the number of entries held, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    // == Stats ==
    /// Returns current table statistics.
    pub async fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.len().await)
    }
}
