use crate::domain::GeoPosition;
use crate::domain::location_provider::LocationProvider;
use crate::overhead_monitor::OverheadMonitor;
use async_trait::async_trait;
use tokio::sync::mpsc::{Receiver, Sender};
use tracing::{debug, instrument};

/// Emits the statically configured user location once. Stands in for a real
/// positioning source on hosts that have none.
#[derive(Debug)]
pub struct StaticLocationProvider {
    location: GeoPosition,
}

impl StaticLocationProvider {
    pub fn new(location: GeoPosition) -> Self {
        StaticLocationProvider { location }
    }
}

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn watch(&self, tx: Sender<GeoPosition>) {
        tx.send(self.location).await.unwrap_or_default();
    }
}

/// Forwards location updates to the monitor, dropping updates that moved less
/// than `min_movement_m` from the last accepted location.
#[instrument(skip_all)]
pub async fn location_listener(mut rx: Receiver<GeoPosition>, monitor: OverheadMonitor, min_movement_m: f64) {
    while let Some(location) = rx.recv().await {
        if let Some(current) = monitor.user_location().await {
            let moved_m = current.distance_m(&location);
            if moved_m < min_movement_m {
                debug!("📍 Ignoring location update, moved only {:.0} m", moved_m);
                continue;
            }
        }

        monitor.set_user_location(location).await;
    }
}
