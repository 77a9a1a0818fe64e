use crate::domain::{GeoPosition, NotificationEvent};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Decides whether the ISS is overhead.
///
/// The state behind the lock is written by `evaluate` and `set_user_location`
/// only; the location update stream and the tick drivers run on separate tasks,
/// and the lock keeps them to a single writer at a time.
#[derive(Clone, Debug)]
pub struct OverheadMonitor {
    state: Arc<RwLock<MonitorState>>,
    threshold_m: f64,
}

#[derive(Debug, Default)]
struct MonitorState {
    user_location: Option<GeoPosition>,
    last_iss_location: Option<GeoPosition>,
    last_check_time: Option<DateTime<Utc>>,
}

impl OverheadMonitor {
    pub fn new(threshold_m: f64) -> Self {
        OverheadMonitor {
            state: Arc::new(RwLock::new(MonitorState::default())),
            threshold_m,
        }
    }

    pub async fn set_user_location(&self, location: GeoPosition) {
        let mut state = self.state.write().await;
        state.user_location = Some(location);
        info!("📍 User location is now latitude {:.4}°, longitude {:.4}°", location.latitude, location.longitude);
    }

    pub async fn user_location(&self) -> Option<GeoPosition> {
        self.state.read().await.user_location
    }

    /// Distance from the user to `iss_position` in meters, or `None` when no
    /// user location is known yet.
    pub async fn distance_from_user(&self, iss_position: GeoPosition) -> Option<f64> {
        let state = self.state.read().await;
        state.user_location.map(|user| user.distance_m(&iss_position))
    }

    /// Runs one overhead check against the given position.
    ///
    /// Returns the notification to dispatch when the ISS is within the
    /// threshold distance. `last_iss_location` and `last_check_time` are
    /// recorded only on a detection; a miss leaves the state untouched.
    pub async fn evaluate(&self, iss_position: GeoPosition, now: DateTime<Utc>) -> Option<NotificationEvent> {
        let mut state = self.state.write().await;
        let user_location = state.user_location?;

        let distance_m = user_location.distance_m(&iss_position);
        if distance_m > self.threshold_m {
            debug!("🛰 ISS is {:.0} km away, not overhead", distance_m / 1000.0);
            return None;
        }

        state.last_iss_location = Some(iss_position);
        state.last_check_time = Some(now);
        info!("🛰 ISS is overhead, {:.0} km away", distance_m / 1000.0);

        Some(NotificationEvent::overhead(iss_position, now))
    }
}
