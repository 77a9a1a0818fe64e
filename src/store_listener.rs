use crate::store::TrackerSnapshot;
use tokio::sync::watch::Receiver;
use tracing::{info, instrument, warn};

/// Logs every published snapshot. This is the console stand-in for the map
/// view; a real UI would subscribe to the same channel.
#[instrument(skip_all)]
pub async fn store_listener(mut rx: Receiver<TrackerSnapshot>) {
    while rx.changed().await.is_ok() {
        let snapshot: TrackerSnapshot = rx.borrow().clone();

        if let Some(error) = &snapshot.last_error {
            warn!("🗺 Position unavailable: {}", error);
            continue;
        }

        if let Some(position) = snapshot.position {
            info!("🗺 ISS at latitude {:.4}°, longitude {:.4}°", position.latitude, position.longitude);
        }
    }
}
