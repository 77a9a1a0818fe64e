use crate::app_config::AppConfig;
use crate::tracker::Tracker;
use chrono::Utc;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch::Receiver;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument, warn};

/// Runs a full check tick at every occurrence of the configured cron schedule.
/// This is the background cadence, independent of the foreground poll loop,
/// for hosts that grant execution windows rather than continuous runtime.
#[instrument(skip_all)]
pub async fn check_scheduler(tracker: Tracker, config: Arc<AppConfig>, mut shutdown_rx: Receiver<bool>) {
    let cron = config.overhead().check_schedule();
    let schedule = match Schedule::from_str(cron) {
        Ok(schedule) => schedule,
        Err(_e) => {
            warn!("🕗 Scheduling overhead checks... failed, invalid cron expression '{}'", cron);
            return;
        }
    };
    info!("🕗 Scheduling overhead checks... OK, running on '{}'", cron);

    for datetime in schedule.upcoming(Utc) {
        let duration = datetime.signed_duration_since(Utc::now());
        if duration.num_milliseconds() < 0 {
            continue; // Already passed
        }

        let scheduled_instant = Instant::now() + Duration::from_millis(duration.num_milliseconds() as u64);
        tokio::select! {
            _ = shutdown_rx.changed() => break,
            _ = sleep_until(scheduled_instant) => {
                debug!(cron, "🕗 Running scheduled overhead check...");
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = tracker.tick() => {}
                }
            }
        }
    }

    info!("🛑 Overhead check scheduler stopped");
}
