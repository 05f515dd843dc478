//! Expiry Sweep Task
//!
//! Background task that periodically removes expired strategy entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::StrategyTable;

/// Spawns a background task that periodically purges expired entries.
///
/// The task sleeps for `interval` between passes and takes the table's write
/// lock only for the duration of a pass. It exits once `shutdown` is
/// cancelled, including while a sleep is in progress.
///
/// # Arguments
/// * `table` - Table shared with the owning cache
/// * `interval` - Time between sweep passes
/// * `shutdown` - Token that stops the task
///
/// # Returns
/// A JoinHandle the owner awaits after cancelling `shutdown`.
pub fn spawn_sweep_task(
    table: Arc<StrategyTable>,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting strategy expiry sweep with interval of {:?}", interval);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }

            let removed = table.purge_expired(Instant::now()).await;
            if removed > 0 {
                info!("Strategy sweep: removed {} expired entries", removed);
            } else {
                debug!("Strategy sweep: no expired entries found");
            }
        }

        info!("Strategy expiry sweep stopped");
    })
}
