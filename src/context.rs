//! Request Context Module
//!
//! Per-call context passed down the lookup chain: a cancellation token, an
//! optional deadline and an optional block of outgoing call metadata.

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::warn;

// == Context Error ==
/// Reason a context stopped waiting on outstanding work.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("context canceled")]
    Cancelled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

// == Header Set ==
/// Fixed name/value metadata attached to outbound calls.
///
/// Names are stored lowercase, as outbound RPC metadata keys are. When two
/// pairs normalize to the same name the later one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    headers: BTreeMap<String, String>,
}

impl HeaderSet {
    /// Creates an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `name=value` pairs separated by commas.
    ///
    /// Whitespace around names and values is trimmed. Pairs without `=` or
    /// with an empty name are skipped with a warning.
    pub fn parse(raw: &str) -> Self {
        let mut headers = BTreeMap::new();
        for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match pair.split_once('=') {
                Some((name, value)) if !name.trim().is_empty() => {
                    headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
                }
                _ => warn!("Ignoring malformed header pair: {:?}", pair),
            }
        }
        Self { headers }
    }

    /// Returns the value for `name`, matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterates over (name, value) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderSet
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let headers = iter
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.into()))
            .collect();
        Self { headers }
    }
}

// == Request Context ==
/// Cancellation, deadline and outgoing metadata for one lookup.
///
/// Cloning a context shares its cancellation token; builder methods return a
/// new context and leave the receiver untouched.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
    outgoing: Option<HeaderSet>,
}

impl RequestContext {
    /// Creates a context that is never cancelled and has no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a context observing `token` for cancellation.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: token,
            ..self.clone()
        }
    }

    /// Returns a context with the given deadline. An earlier existing
    /// deadline is kept.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };
        Self {
            deadline: Some(deadline),
            ..self.clone()
        }
    }

    /// Returns a context whose deadline is `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self.clone(),
        }
    }

    /// Returns a context carrying `metadata` as its outgoing metadata block,
    /// replacing any block the receiver had.
    pub fn with_outgoing_metadata(&self, metadata: HeaderSet) -> Self {
        Self {
            outgoing: Some(metadata),
            ..self.clone()
        }
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn outgoing_metadata(&self) -> Option<&HeaderSet> {
        self.outgoing.as_ref()
    }

    /// Returns true once the token fired or the deadline passed.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    // == Done ==
    /// Resolves when the context is cancelled or its deadline passes.
    pub async fn done(&self) -> ContextError {
        match self.deadline {
            Some(deadline) => tokio::select! {
                biased;
                _ = self.cancel.cancelled() => ContextError::Cancelled,
                _ = tokio::time::sleep_until(deadline) => ContextError::DeadlineExceeded,
            },
            None => {
                self.cancel.cancelled().await;
                ContextError::Cancelled
            }
        }
    }

    // == Until Done ==
    /// Drives `fut` to completion unless the context finishes first, in which
    /// case `fut` is dropped and the context error is returned.
    pub async fn until_done<F, T>(&self, fut: F) -> anyhow::Result<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        tokio::select! {
            biased;
            reason = self.done() => Err(reason.into()),
            result = fut => result,
        }
    }
}
