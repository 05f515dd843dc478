//! Remote Sampling - caching facade over a remote sampling-strategy provider
//!
//! Serves per-service sampling strategies from a TTL cache and falls back to
//! a remote authority on a miss, attaching fixed headers to every outbound
//! call.

pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use cache::{CacheStats, StrategyCache};
pub use config::Config;
pub use context::{ContextError, HeaderSet, RequestContext};
pub use error::{Result, SamplingError};
pub use models::SamplingStrategyResponse;
pub use store::{fetch_fn, RemoteStrategyStore, StrategyFetcher};
