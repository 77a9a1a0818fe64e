use crate::domain::GeoPosition;
use crate::domain::events::Event;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, instrument, warn};

/// What a display collaborator sees: the latest fetched position and the
/// latest fetch error, as an immutable value. A failed fetch sets the error
/// but keeps the previously fetched position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackerSnapshot {
    pub position: Option<GeoPosition>,
    pub fetched_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

#[derive(Debug)]
pub struct Store {
    snapshot: TrackerSnapshot,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<TrackerSnapshot>,
    notifier_rx: WatchReceiver<TrackerSnapshot>,
}

impl Store {
    pub fn new(rx: Receiver<Event>) -> Self {
        let snapshot = TrackerSnapshot::default();
        let (notifier_tx, notifier_rx) = watch::channel::<TrackerSnapshot>(snapshot.clone());

        Store {
            snapshot,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<TrackerSnapshot> {
        self.notifier_rx.clone()
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            match event {
                Event::PositionFetched(fix) => {
                    self.snapshot.position = Some(fix.position);
                    self.snapshot.fetched_at = Some(fix.fetched_at);
                    self.snapshot.last_error = None;
                }
                Event::FetchFailed(reason) => {
                    warn!("⚠️ Fetch failed: {}", reason);
                    self.snapshot.last_error = Some(reason);
                }
            }

            self.notifier_tx.send(self.snapshot.clone()).unwrap_or_default();
        }
    }
}
