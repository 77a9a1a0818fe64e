use crate::app_config::AppConfig;
use reqwest::Client;
use thiserror::Error;

/// Builds the one reusable HTTP client. The open-notify API is unauthenticated,
/// so the only concern here is the request timeout.
pub fn new_client(config: &AppConfig) -> Result<Client, OpenNotifyClientError> {
    let client = Client::builder().timeout(config.open_notify().request_timeout()).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum OpenNotifyClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use std::time::Duration;

    #[tokio::test]
    async fn new_client_performs_plain_get_requests() -> Result<(), OpenNotifyClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("GET", "/iss-now.json").with_status(200).create_async().await;

        let config = AppConfigBuilder::new().open_notify_url(server.url()).build();
        let client = new_client(&config)?;

        client.get(format!("{}/iss-now.json", server.url())).send().await?;

        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn new_client_applies_the_configured_request_timeout() -> Result<(), OpenNotifyClientError> {
        let config = AppConfigBuilder::new().request_timeout(Duration::from_millis(50)).build();
        let client = new_client(&config)?;

        // Port 9 (discard) never answers; the configured timeout must trip.
        let result = client.get("http://10.255.255.1:9/iss-now.json").send().await;

        assert!(result.is_err());

        Ok(())
    }
}
