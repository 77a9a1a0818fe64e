use crate::domain::NotificationEvent;
use crate::domain::ambient::{AmbientDisplay, AmbientUpdate};
use crate::domain::dispatcher::NotificationDispatcher;
use async_trait::async_trait;
use tracing::{info, instrument};

/// Logs notifications. Stand-in for an OS notification center; swap in a real
/// dispatcher to surface alerts elsewhere.
#[derive(Debug)]
pub struct LogDispatcher;

#[async_trait]
impl NotificationDispatcher for LogDispatcher {
    #[instrument(skip_all)]
    async fn dispatch(&self, event: NotificationEvent) {
        info!(identifier = %event.identifier, "🔔 {} {}", event.title, event.body);
    }
}

/// Logs live-status updates the way an ambient widget renders them: whole
/// kilometers, coordinates to two decimal places.
#[derive(Debug)]
pub struct LogAmbientDisplay;

#[async_trait]
impl AmbientDisplay for LogAmbientDisplay {
    async fn update(&self, update: AmbientUpdate) {
        info!(
            "🛰 ISS distance {} km, lat {:.2}°, long {:.2}°",
            (update.distance_m / 1000.0) as i64,
            update.position.latitude,
            update.position.longitude
        );
    }
}
