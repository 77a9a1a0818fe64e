use crate::domain::GeoPosition;
use async_trait::async_trait;
use std::fmt::Debug;

/// Live status pushed to an ambient display on every successful check while
/// the display feature is enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientUpdate {
    pub distance_m: f64,
    pub position: GeoPosition,
}

/// A persistent, always-visible status surface, e.g. a lock-screen widget.
#[async_trait]
pub trait AmbientDisplay: Debug + Send + Sync {
    async fn update(&self, update: AmbientUpdate);
}
