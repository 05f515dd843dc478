//! Remote Strategy Store
//!
//! Answers "which sampling strategy should this service use?" from the cache
//! when possible and from the remote authority otherwise. Every outbound
//! call carries the configured header additions as call metadata.

mod fetcher;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::{new_strategy_cache, CacheStats, StrategyCache};
use crate::config::Config;
use crate::context::{HeaderSet, RequestContext};
use crate::error::{Result, SamplingError};
use crate::models::SamplingStrategyResponse;

pub use fetcher::{fetch_fn, FetchFn, StrategyFetcher};

// == Remote Strategy Store ==
/// Caching decorator over a [`StrategyFetcher`].
///
/// Concurrent misses for the same service are not coalesced: each one calls
/// the delegate and the last `put` wins.
pub struct RemoteStrategyStore {
    /// Headers copied into every outbound call
    header_additions: HeaderSet,
    /// Remote authority consulted on a miss
    delegate: Arc<dyn StrategyFetcher>,
    /// No-op or TTL cache, fixed at construction
    cache: Box<dyn StrategyCache>,
}

impl RemoteStrategyStore {
    // == Constructor ==
    /// Creates a store over `delegate`.
    ///
    /// A zero `reload_interval` disables caching; otherwise responses are
    /// served from the cache for that long. A TTL cache spawns its sweep on
    /// the current Tokio runtime.
    pub fn new<D>(delegate: D, header_additions: HeaderSet, reload_interval: Duration) -> Self
    where
        D: StrategyFetcher + 'static,
    {
        Self {
            header_additions,
            delegate: Arc::new(delegate),
            cache: new_strategy_cache(reload_interval),
        }
    }

    /// Creates a store from configuration.
    pub fn from_config<D>(config: &Config, delegate: D) -> Self
    where
        D: StrategyFetcher + 'static,
    {
        Self::new(delegate, config.headers.clone(), config.reload_interval)
    }

    // == Get Sampling Strategy ==
    /// Returns the strategy for `service_name`.
    ///
    /// A valid cached response is returned without contacting the delegate.
    /// On a miss the delegate is called with the caller's context enriched
    /// with the header additions, and a successful result is cached.
    /// Failures, including cancellation or deadline expiry of `ctx` while the
    /// call is outstanding, are returned as [`SamplingError::RemoteCall`] and
    /// never cached.
    pub async fn get_sampling_strategy(
        &self,
        ctx: &RequestContext,
        service_name: &str,
    ) -> Result<SamplingStrategyResponse> {
        if let Some(cached) = self.cache.get(service_name).await {
            debug!(service = service_name, "Sampling strategy served from cache");
            return Ok(cached);
        }

        debug!(service = service_name, "Sampling strategy cache miss, calling remote");
        let outbound = self.enhance_context(ctx);
        let fresh = outbound
            .until_done(self.delegate.fetch(&outbound, service_name))
            .await
            .map_err(|err| {
                warn!(service = service_name, error = %err, "Remote sampling strategy call failed");
                SamplingError::RemoteCall(err)
            })?;

        self.cache.put(service_name, fresh.clone()).await;
        Ok(fresh)
    }

    // == Enhance Context ==
    /// Returns a copy of `ctx` whose outgoing metadata is exactly the header
    /// additions. An empty header set still yields an (empty) metadata block.
    fn enhance_context(&self, ctx: &RequestContext) -> RequestContext {
        ctx.with_outgoing_metadata(self.header_additions.clone())
    }

    /// Returns a snapshot of the cache statistics.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    // == Close ==
    /// Shuts down the cache, stopping its sweep.
    pub async fn close(&self) -> Result<()> {
        self.cache.close().await
    }
}

impl std::fmt::Debug for RemoteStrategyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteStrategyStore")
            .field("header_additions", &self.header_additions)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> HeaderSet {
        [("x-tenant", "acme"), ("authorization", "Bearer abc")]
            .into_iter()
            .collect()
    }

    fn store(headers: HeaderSet) -> RemoteStrategyStore {
        let delegate = fetch_fn(|_ctx, _service| async {
            Ok(SamplingStrategyResponse::probabilistic(1.0))
        });
        RemoteStrategyStore::new(delegate, headers, Duration::ZERO)
    }

    #[test]
    fn test_enhance_context_copies_headers() {
        let store = store(headers());
        let ctx = RequestContext::new();

        let enriched = store.enhance_context(&ctx);

        assert_eq!(enriched.outgoing_metadata(), Some(&headers()));
        assert!(ctx.outgoing_metadata().is_none());
    }

    #[test]
    fn test_enhance_context_empty_headers_still_sets_metadata() {
        let store = store(HeaderSet::new());

        let enriched = store.enhance_context(&RequestContext::new());

        let metadata = enriched.outgoing_metadata().expect("metadata block expected");
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_enhance_context_replaces_existing_metadata() {
        let store = store(headers());
        let ctx = RequestContext::new()
            .with_outgoing_metadata([("x-stale", "1")].into_iter().collect());

        let enriched = store.enhance_context(&ctx);

        assert_eq!(enriched.outgoing_metadata(), Some(&headers()));
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = Config {
            reload_interval: Duration::from_secs(30),
            headers: headers(),
        };
        let delegate = fetch_fn(|_ctx, _service| async {
            Ok(SamplingStrategyResponse::rate_limiting(1))
        });
        let store = RemoteStrategyStore::from_config(&config, delegate);

        let ctx = RequestContext::new();
        store.get_sampling_strategy(&ctx, "checkout").await.unwrap();
        store.get_sampling_strategy(&ctx, "checkout").await.unwrap();

        let stats = store.cache_stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.total_entries, 1);
        store.close().await.unwrap();
    }
}
