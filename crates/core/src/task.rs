//! Interval task helper.
//!
//! Node plumbing that needs a fixed cadence (vote rebroadcast, state
//! cleanup) runs through [`run_periodically`] so shutdown behaves the same
//! everywhere: the task stops at the next cancellation check and the
//! spawner's tracker observes completion.

use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Run `task` once immediately, then on every `period` tick until `cancel`
/// fires.
///
/// Spawn this on a [`tokio_util::task::TaskTracker`] when the caller needs
/// to await outstanding periodic work during shutdown; the tracker's count
/// drops as soon as this future returns.
pub async fn run_periodically<F>(mut task: F, period: Duration, cancel: CancellationToken)
where
    F: FnMut(),
{
    task();

    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // A tokio interval's first tick completes immediately; the eager
    // invocation above already covered it.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                trace!("periodic task cancelled");
                return;
            }
            _ = ticker.tick() => task(),
        }
    }
}
