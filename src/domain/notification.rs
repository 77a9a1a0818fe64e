use crate::domain::GeoPosition;
use chrono::{DateTime, Utc};

/// A fire-and-forget notification, handed to a `NotificationDispatcher`.
/// At most one is produced per check.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationEvent {
    pub title: String,
    pub body: String,
    pub identifier: String,
}

impl NotificationEvent {
    pub fn overhead(position: GeoPosition, at: DateTime<Utc>) -> Self {
        NotificationEvent {
            title: "ISS Overhead!".to_string(),
            body: format!(
                "The International Space Station is currently passing over your location! It is at latitude {:.4}°, longitude {:.4}°.",
                position.latitude, position.longitude
            ),
            identifier: format!("iss-overhead-{}", at.timestamp_millis()),
        }
    }
}
