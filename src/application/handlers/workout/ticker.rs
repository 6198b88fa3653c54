//! Elapsed-time ticker for the active workout.
//!
//! The ticker owns no time state. Each tick re-derives elapsed seconds
//! from the tracker's timestamps, so a stopped or delayed ticker can
//! never corrupt the displayed duration; restarting it resumes from the
//! correct value.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use super::WorkoutTracker;

/// Spawns a background task publishing the active workout's elapsed
/// seconds on every period.
///
/// The task stops itself when the workout is paused or the slot empties,
/// and when the last receiver is dropped. Callers restart it on resume;
/// the published value picks up exactly where the pause froze it.
pub fn spawn_elapsed_ticker(
    tracker: Arc<WorkoutTracker>,
    period: Duration,
) -> watch::Receiver<u64> {
    let initial = tracker.elapsed_seconds().unwrap_or(0);
    let (tx, rx) = watch::channel(initial);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;

            let elapsed = match tracker.elapsed_seconds() {
                Some(elapsed) if !tracker.is_paused() => elapsed,
                _ => {
                    debug!("elapsed ticker stopping: workout paused or cleared");
                    break;
                }
            };
            if tx.send(elapsed).is_err() {
                break;
            }
        }
    });

    rx
}
