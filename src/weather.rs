use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::WeatherError;

/// Unit system requested from the weather service.
pub const UNITS: &str = "metric";

/// Source of raw weather payloads for a city key such as `Manila,PH`.
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn fetch(&self, city: &str) -> Result<Value, WeatherError>;
}

/// Calls the weather webhook over HTTP.
pub struct WebhookWeatherClient {
    client: reqwest::Client,
    url: String,
}

impl WebhookWeatherClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl WeatherLookup for WebhookWeatherClient {
    async fn fetch(&self, city: &str) -> Result<Value, WeatherError> {
        debug!("Requesting weather for '{}'", city);

        let response = self
            .client
            .get(&self.url)
            .query(&[("city", city), ("units", UNITS)])
            .send()
            .await
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| WeatherError::InvalidPayload(e.to_string()))
    }
}
