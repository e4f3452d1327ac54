//! OpenWeatherMap weather client
//!
//! HTTP client for the OpenWeatherMap current-weather and 5-day forecast
//! endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentResponse, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed (transport or HTTP status)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response decoded but carried an unexpected status marker
    #[error("Unexpected status marker in response: {0}")]
    UnexpectedStatus(String),
}

/// Weather service configuration
///
/// Injected at client construction; there are no process-wide constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Provider API key
    pub api_key: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl WeatherConfig {
    /// Default configuration with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching weather data by city name
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Fetch current weather for a city
    async fn fetch_current(&self, city: &str) -> Result<CurrentResponse, WeatherError>;

    /// Fetch the 5-day/3-hour forecast for a city
    async fn fetch_forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the full URL for an endpoint ("weather" or "forecast")
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Issue a GET against an endpoint and decode the body as `T`
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherError> {
        let url = self.endpoint_url(endpoint);
        debug!(endpoint, city, "Fetching weather data");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn fetch_current(&self, city: &str) -> Result<CurrentResponse, WeatherError> {
        let payload: CurrentResponse = self.get_json("weather", city).await?;

        if payload.cod != 200 {
            return Err(WeatherError::UnexpectedStatus(payload.cod.to_string()));
        }

        Ok(payload)
    }

    #[instrument(skip(self))]
    async fn fetch_forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError> {
        let payload: ForecastResponse = self.get_json("forecast", city).await?;

        if payload.cod != "200" {
            return Err(WeatherError::UnexpectedStatus(payload.cod.clone()));
        }

        Ok(payload)
    }
}
