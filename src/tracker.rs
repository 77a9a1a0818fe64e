use crate::app_config::AppConfig;
use crate::domain::ambient::{AmbientDisplay, AmbientUpdate};
use crate::domain::dispatcher::NotificationDispatcher;
use crate::domain::events::Event;
use crate::open_notify;
use crate::overhead_monitor::OverheadMonitor;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;
use tracing::{instrument, warn};

/// Runs one fetch-and-evaluate cycle. The drivers (interval poller, cron
/// scheduler) share a single `Tracker`, so a tick looks the same regardless of
/// which cadence fired it.
#[derive(Clone, Debug)]
pub struct Tracker {
    client: Client,
    config: Arc<AppConfig>,
    monitor: OverheadMonitor,
    dispatcher: Arc<dyn NotificationDispatcher>,
    ambient: Arc<dyn AmbientDisplay>,
    events_tx: Sender<Event>,
}

impl Tracker {
    pub fn new(
        client: Client,
        config: Arc<AppConfig>,
        monitor: OverheadMonitor,
        dispatcher: Arc<dyn NotificationDispatcher>,
        ambient: Arc<dyn AmbientDisplay>,
        events_tx: Sender<Event>,
    ) -> Self {
        Tracker {
            client,
            config,
            monitor,
            dispatcher,
            ambient,
            events_tx,
        }
    }

    /// One tick: fetch, publish the result to the store, feed the ambient
    /// display when enabled, then evaluate and dispatch a notification on a
    /// detection. Cancelling the future mid-fetch means nothing downstream of
    /// the fetch runs.
    #[instrument(skip_all)]
    pub async fn tick(&self) {
        let fix = match open_notify::fetch(&self.client, &self.config).await {
            Ok(fix) => fix,
            Err(e) => {
                warn!("⚠️ Fetching the ISS position failed: {}", e);
                if self.events_tx.send(Event::FetchFailed(e.to_string())).await.is_err() {
                    warn!("⚠️ Store is gone, dropping the fetch error");
                }
                return;
            }
        };

        if self.events_tx.send(Event::PositionFetched(fix)).await.is_err() {
            warn!("⚠️ Store is gone, dropping the position update");
        }

        if self.config.display().ambient_enabled() {
            if let Some(distance_m) = self.monitor.distance_from_user(fix.position).await {
                self.ambient
                    .update(AmbientUpdate {
                        distance_m,
                        position: fix.position,
                    })
                    .await;
            }
        }

        if let Some(event) = self.monitor.evaluate(fix.position, fix.fetched_at).await {
            self.dispatcher.dispatch(event).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::{GeoPosition, NotificationEvent};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc;

    #[derive(Debug, Default)]
    pub struct RecordingDispatcher {
        events: Mutex<Vec<NotificationEvent>>,
    }

    impl RecordingDispatcher {
        fn dispatched(&self) -> Vec<NotificationEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NotificationDispatcher for RecordingDispatcher {
        async fn dispatch(&self, event: NotificationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[derive(Debug, Default)]
    pub struct RecordingAmbientDisplay {
        updates: Mutex<Vec<AmbientUpdate>>,
    }

    impl RecordingAmbientDisplay {
        fn updates(&self) -> Vec<AmbientUpdate> {
            self.updates.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AmbientDisplay for RecordingAmbientDisplay {
        async fn update(&self, update: AmbientUpdate) {
            self.updates.lock().unwrap().push(update);
        }
    }

    fn body(latitude: &str, longitude: &str) -> String {
        format!(
            r#"{{ "message": "success", "timestamp": 1745049600, "iss_position": {{ "latitude": "{}", "longitude": "{}" }} }}"#,
            latitude, longitude
        )
    }

    struct Harness {
        tracker: Tracker,
        dispatcher: Arc<RecordingDispatcher>,
        ambient: Arc<RecordingAmbientDisplay>,
        events_rx: mpsc::Receiver<Event>,
    }

    fn harness(config: AppConfig) -> Harness {
        let (events_tx, events_rx) = mpsc::channel::<Event>(8);
        let dispatcher = Arc::new(RecordingDispatcher::default());
        let ambient = Arc::new(RecordingAmbientDisplay::default());
        let monitor = OverheadMonitor::new(config.overhead().threshold_m());
        let tracker = Tracker::new(
            Client::new(),
            Arc::new(config),
            monitor,
            dispatcher.clone(),
            ambient.clone(),
            events_tx,
        );

        Harness {
            tracker,
            dispatcher,
            ambient,
            events_rx,
        }
    }

    #[tokio::test]
    async fn a_distant_pass_then_an_overhead_pass_notifies_exactly_once() {
        let mut server = mockito::Server::new_async().await;

        // First request answers with a position over London, the second with
        // one on the equator right above the user.
        let calls = AtomicUsize::new(0);
        let mock = server
            .mock("GET", "/iss-now.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body_from_request(move |_| {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    body("51.5", "-0.1").into_bytes()
                } else {
                    body("0.0", "0.0").into_bytes()
                }
            })
            .expect(2)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().open_notify_url(server.url()).build();
        let mut harness = harness(config);
        harness.tracker.monitor.set_user_location(GeoPosition::default()).await;

        harness.tracker.tick().await;
        assert_eq!(harness.dispatcher.dispatched(), vec![], "London is ~5,700 km from the equator");

        harness.tracker.tick().await;
        let dispatched = harness.dispatcher.dispatched();
        assert_eq!(dispatched.len(), 1);
        assert_eq!(dispatched[0].title, "ISS Overhead!");

        mock.assert();

        // Both ticks published their fix to the store.
        let first = harness.events_rx.recv().await.unwrap();
        assert!(matches!(first, Event::PositionFetched(fix) if fix.position == (GeoPosition { latitude: 51.5, longitude: -0.1 })));
        let second = harness.events_rx.recv().await.unwrap();
        assert!(matches!(second, Event::PositionFetched(fix) if fix.position == GeoPosition::default()));
    }

    #[tokio::test]
    async fn a_failed_fetch_publishes_the_error_and_does_not_notify() {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("GET", "/iss-now.json").with_status(500).create_async().await;

        let config = AppConfigBuilder::new().open_notify_url(server.url()).build();
        let mut harness = harness(config);
        harness.tracker.monitor.set_user_location(GeoPosition::default()).await;

        harness.tracker.tick().await;

        mock.assert();
        assert_eq!(harness.dispatcher.dispatched(), vec![]);
        let event = harness.events_rx.recv().await.unwrap();
        assert!(matches!(event, Event::FetchFailed(_)));
    }

    #[tokio::test]
    async fn the_ambient_display_is_fed_when_enabled() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/iss-now.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body("90.0", "0.0"))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().open_notify_url(server.url()).ambient_enabled(true).build();
        let harness = harness(config);
        harness.tracker.monitor.set_user_location(GeoPosition::default()).await;

        harness.tracker.tick().await;

        mock.assert();
        // The ISS is far from overhead, yet the display still updates.
        let updates = harness.ambient.updates();
        assert_eq!(updates.len(), 1);
        assert!((updates[0].distance_m - 10_007_543.0).abs() < 1_000.0);
        assert_eq!(harness.dispatcher.dispatched(), vec![]);
    }

    #[tokio::test]
    async fn the_ambient_display_is_not_fed_when_disabled() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/iss-now.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body("0.0", "0.0"))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().open_notify_url(server.url()).build();
        let harness = harness(config);
        harness.tracker.monitor.set_user_location(GeoPosition::default()).await;

        harness.tracker.tick().await;

        mock.assert();
        assert_eq!(harness.ambient.updates(), vec![]);
    }
}
