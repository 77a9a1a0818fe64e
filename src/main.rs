use crate::app_config::AppConfig;
use crate::domain::GeoPosition;
use crate::domain::events::Event;
use crate::domain::location_provider::LocationProvider;
use crate::location::{StaticLocationProvider, location_listener};
use crate::notify::{LogAmbientDisplay, LogDispatcher};
use crate::overhead_monitor::OverheadMonitor;
use crate::poller::poll;
use crate::scheduler::check_scheduler;
use crate::store::Store;
use crate::store_listener::store_listener;
use crate::tracker::Tracker;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task;
use tracing::info;

mod app_config;
mod domain;
mod location;
mod notify;
mod open_notify;
mod overhead_monitor;
mod poller;
mod scheduler;
mod store;
mod store_listener;
mod tracker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load());
    info!("✅  Loaded configuration");

    let client = open_notify::new_client(&config)?;

    let (events_tx, events_rx) = mpsc::channel::<Event>(config.core().store_buffer_size());
    let mut store = Store::new(events_rx);
    let notifier_rx = store.notifier();

    task::spawn(async move {
        store_listener(notifier_rx).await;
    });
    info!("✅  Initialized store listener");

    task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");

    let monitor = OverheadMonitor::new(config.overhead().threshold_m());

    let (location_tx, location_rx) = mpsc::channel::<GeoPosition>(8);
    let provider = StaticLocationProvider::new(config.location().position());
    task::spawn({
        let monitor = monitor.clone();
        let min_movement_m = config.location().min_movement_m();
        async move {
            location_listener(location_rx, monitor, min_movement_m).await;
        }
    });
    task::spawn(async move {
        provider.watch(location_tx).await;
    });
    info!("✅  Initialized location updates");

    let tracker = Tracker::new(
        client,
        config.clone(),
        monitor,
        Arc::new(LogDispatcher),
        Arc::new(LogAmbientDisplay),
        events_tx,
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    task::spawn(check_scheduler(tracker.clone(), config.clone(), shutdown_rx.clone()));
    info!("✅  Scheduled background overhead checks");

    let poller = task::spawn(poll(tracker, config.core().poll_interval(), shutdown_rx));
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down...");
    shutdown_tx.send(true).unwrap_or_default();
    poller.await?;

    Ok(())
}
