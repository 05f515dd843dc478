//! TTL Strategy Cache Module
//!
//! Time-bounded cache of strategy responses with a background sweep that
//! evicts expired entries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cache::{CacheEntry, CacheStats, StrategyCache, StrategyTable};
use crate::error::{Result, SamplingError};
use crate::models::SamplingStrategyResponse;
use crate::tasks::spawn_sweep_task;

// == TTL Strategy Cache ==
/// Cache whose entries are served for `ttl` after they were stored.
///
/// Expiry is checked on every lookup, so the sweep only bounds memory.
#[derive(Debug)]
pub struct TtlStrategyCache {
    /// How long a stored response stays valid
    ttl: Duration,
    /// Entries shared with the sweep task
    table: Arc<StrategyTable>,
    /// Stops the sweep task
    shutdown: CancellationToken,
    /// Sweep task handle, taken on close
    sweep: Mutex<Option<JoinHandle<()>>>,
    closed: AtomicBool,
}

impl TtlStrategyCache {
    // == Constructor ==
    /// Creates a cache that sweeps expired entries once per `ttl`.
    ///
    /// The sweep is spawned on the current Tokio runtime. Outside a runtime
    /// no sweep runs and expired entries are only ignored, not evicted.
    pub fn new(ttl: Duration) -> Self {
        Self::with_sweep_interval(ttl, ttl)
    }

    /// Creates a cache with an explicit sweep interval.
    pub fn with_sweep_interval(ttl: Duration, sweep_interval: Duration) -> Self {
        let table = Arc::new(StrategyTable::new());
        let shutdown = CancellationToken::new();

        let sweep = if sweep_interval.is_zero() {
            warn!("Sweep interval is zero, expired strategies will not be evicted");
            None
        } else if Handle::try_current().is_err() {
            warn!("No Tokio runtime available, expired strategies will not be evicted");
            None
        } else {
            Some(spawn_sweep_task(
                table.clone(),
                sweep_interval,
                shutdown.clone(),
            ))
        };

        Self {
            ttl,
            table,
            shutdown,
            sweep: Mutex::new(sweep),
            closed: AtomicBool::new(false),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[async_trait]
impl StrategyCache for TtlStrategyCache {
    async fn get(&self, service_name: &str) -> Option<SamplingStrategyResponse> {
        if self.closed.load(Ordering::Acquire) {
            return None;
        }
        self.table.lookup(service_name, Instant::now()).await
    }

    async fn put(&self, service_name: &str, response: SamplingStrategyResponse) {
        if self.closed.load(Ordering::Acquire) {
            return;
        }
        let entry = CacheEntry::new(response, Instant::now(), self.ttl);
        self.table.insert(service_name.to_string(), entry).await;
    }

    async fn stats(&self) -> CacheStats {
        self.table.stats().await
    }

    // == Close ==
    /// Stops the sweep, waits for it to exit and drops all entries.
    async fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        self.shutdown.cancel();
        let sweep = self.sweep.lock().await.take();
        self.table.clear().await;

        if let Some(handle) = sweep {
            handle
                .await
                .map_err(|e| SamplingError::CacheShutdown(e.to_string()))?;
        }

        info!("Strategy cache closed");
        Ok(())
    }
}

impl Drop for TtlStrategyCache {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
