use crate::tracker::Tracker;
use std::time::Duration;
use tokio::sync::watch::Receiver;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, instrument};

/// Drives a tick at a fixed cadence, starting immediately.
///
/// The tick body is awaited inline, so at most one fetch is ever in flight;
/// ticks that would have fired while a slow fetch was running are skipped.
/// When the shutdown channel fires mid-tick the in-flight work is dropped,
/// which means a cancelled fetch never reaches the dispatcher.
#[instrument(skip_all)]
pub async fn poll(tracker: Tracker, period: Duration, mut shutdown_rx: Receiver<bool>) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = shutdown_rx.changed() => break,
            _ = ticker.tick() => {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = tracker.tick() => {}
                }
            }
        }
    }

    info!("🛑 Poller stopped");
}
