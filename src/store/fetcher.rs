//! Strategy Fetcher
//!
//! The delegate the store calls on a cache miss. How the remote authority is
//! reached is up to the implementation.

use std::future::Future;

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::models::SamplingStrategyResponse;

/// Fetches a fresh sampling strategy from the remote authority.
///
/// Implementations should honour the context's cancellation token and
/// deadline and forward its outgoing metadata with the call. The store also
/// stops waiting on its own once the context is done.
#[async_trait]
pub trait StrategyFetcher: Send + Sync {
    async fn fetch(
        &self,
        ctx: &RequestContext,
        service_name: &str,
    ) -> anyhow::Result<SamplingStrategyResponse>;
}

/// Fetcher backed by an async closure. Built with [`fetch_fn`].
#[derive(Clone)]
pub struct FetchFn<F> {
    f: F,
}

/// Wraps an async closure taking `(RequestContext, String)` as a fetcher.
///
/// # Example
/// ```ignore
/// let delegate = fetch_fn(|_ctx, service| async move {
///     client.strategy_for(&service).await
/// });
/// ```
pub fn fetch_fn<F, Fut>(f: F) -> FetchFn<F>
where
    F: Fn(RequestContext, String) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<SamplingStrategyResponse>> + Send + 'static,
{
    FetchFn { f }
}

#[async_trait]
impl<F, Fut> StrategyFetcher for FetchFn<F>
where
    F: Fn(RequestContext, String) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<SamplingStrategyResponse>> + Send + 'static,
{
    async fn fetch(
        &self,
        ctx: &RequestContext,
        service_name: &str,
    ) -> anyhow::Result<SamplingStrategyResponse> {
        (self.f)(ctx.clone(), service_name.to_string()).await
    }
}

impl<F> std::fmt::Debug for FetchFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchFn").finish_non_exhaustive()
    }
}
