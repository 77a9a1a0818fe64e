use crate::domain::GeoPosition;
use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::mpsc::Sender;

/// Pushes user location updates into `tx` until the receiver is gone.
/// Providers decide their own refresh policy; the listener on the receiving
/// end applies a minimum-movement filter before the monitor sees an update.
#[async_trait]
pub trait LocationProvider: Debug + Send + Sync {
    async fn watch(&self, tx: Sender<GeoPosition>);
}
