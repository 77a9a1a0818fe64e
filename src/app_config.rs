use crate::domain::GeoPosition;
use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    open_notify: OpenNotify,
    overhead: Overhead,
    display: Display,
    location: Location,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn open_notify(&self) -> &OpenNotify {
        &self.open_notify
    }

    pub fn overhead(&self) -> &Overhead {
        &self.overhead
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    store_buffer_size: usize,
    #[serde(with = "humantime_serde")]
    poll_interval: Duration,
}

impl Core {
    pub fn store_buffer_size(&self) -> usize {
        self.store_buffer_size
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

#[derive(Debug, Deserialize)]
pub struct OpenNotify {
    url: String,
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
}

impl OpenNotify {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Overhead {
    threshold_m: f64,
    check_schedule: String,
}

impl Overhead {
    pub fn threshold_m(&self) -> f64 {
        self.threshold_m
    }

    pub fn check_schedule(&self) -> &str {
        &self.check_schedule
    }
}

#[derive(Debug, Deserialize)]
pub struct Display {
    ambient_enabled: bool,
}

impl Display {
    pub fn ambient_enabled(&self) -> bool {
        self.ambient_enabled
    }
}

#[derive(Debug, Deserialize)]
pub struct Location {
    latitude: f64,
    longitude: f64,
    min_movement_m: f64,
}

impl Location {
    pub fn position(&self) -> GeoPosition {
        GeoPosition {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn min_movement_m(&self) -> f64 {
        self.min_movement_m
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    store_buffer_size: 1,
                    poll_interval: Duration::from_secs(5),
                },
                open_notify: OpenNotify {
                    url: "http://api.open-notify.org".to_string(),
                    request_timeout: Duration::from_secs(10),
                },
                overhead: Overhead {
                    threshold_m: 1_000_000.0,
                    check_schedule: "0 */15 * * * *".to_string(),
                },
                display: Display { ambient_enabled: false },
                location: Location {
                    latitude: 51.8615899,
                    longitude: 4.3580323,
                    min_movement_m: 1000.0,
                },
            },
        }
    }

    pub fn open_notify_url(mut self, url: String) -> Self {
        self.config.open_notify.url = url;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.open_notify.request_timeout = timeout;
        self
    }

    pub fn check_schedule(mut self, check_schedule: String) -> Self {
        self.config.overhead.check_schedule = check_schedule;
        self
    }

    pub fn ambient_enabled(mut self, enabled: bool) -> Self {
        self.config.display.ambient_enabled = enabled;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
