//! Cache Entry Module
//!
//! Defines a cached strategy response together with its expiry.

use std::time::Duration;

use tokio::time::Instant;

use crate::models::SamplingStrategyResponse;

// == Cache Entry ==
/// A cached strategy response and the instant it stops being valid.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response
    pub value: SamplingStrategyResponse,
    /// Expiry instant, None = no expiration
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after `now`.
    ///
    /// A TTL too large to represent as an instant yields an entry that
    /// never expires.
    pub fn new(value: SamplingStrategyResponse, now: Instant, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: now.checked_add(ttl),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: an entry is valid only while `now < expires_at`,
    /// so it is already expired at the exact expiry instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns the remaining validity at `now`, or None if the entry never
    /// expires. Expired entries report zero.
    pub fn ttl_remaining_at(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(now))
    }
}
