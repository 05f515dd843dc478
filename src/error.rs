//! Error types for the remote sampling store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Sampling Error Enum ==
/// Unified error type for strategy lookups and store shutdown.
#[derive(Error, Debug)]
pub enum SamplingError {
    /// The delegate failed to produce a strategy (including cancellation
    /// and deadline expiry while the call was outstanding).
    #[error("remote call failed: {0}")]
    RemoteCall(#[source] anyhow::Error),

    /// Background work could not be stopped cleanly
    #[error("cache shutdown failed: {0}")]
    CacheShutdown(String),
}

impl SamplingError {
    /// Returns true if the remote call was abandoned because the caller's
    /// context was cancelled or its deadline passed.
    pub fn is_context_error(&self) -> bool {
        match self {
            SamplingError::RemoteCall(err) => {
                err.downcast_ref::<crate::context::ContextError>().is_some()
            }
            SamplingError::CacheShutdown(_) => false,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the remote sampling store.
pub type Result<T> = std::result::Result<T, SamplingError>;
