//! Data models for the remote sampling store
//!
//! Defines the strategy values exchanged with the remote authority.

pub mod strategy;

// Re-export commonly used types
pub use strategy::{
    OperationSamplingStrategy, PerOperationSamplingStrategies, ProbabilisticSamplingStrategy,
    RateLimitingSamplingStrategy, SamplingStrategyResponse, SamplingStrategyType,
};
