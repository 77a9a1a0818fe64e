use crate::app_config::AppConfig;
use crate::domain::PositionFix;
use crate::open_notify::iss_now_response::IssNowResponse;
use chrono::Utc;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument};

/// Fetches the current ISS position. One GET, no internal retry; the caller's
/// tick cadence is the retry policy.
#[instrument(skip_all)]
pub async fn fetch(client: &Client, config: &AppConfig) -> Result<PositionFix, FetchError> {
    let url = format!("{}/iss-now.json", config.open_notify().url());
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(FetchError::Network)?
        .error_for_status()
        .map_err(FetchError::Network)?;

    let payload = response.json::<IssNowResponse>().await.map_err(FetchError::Decode)?;
    debug!(message = %payload.message, api_timestamp = payload.timestamp, "📡 Received ISS position");

    Ok(PositionFix {
        position: payload.iss_position.position(),
        fetched_at: Utc::now(),
    })
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}
