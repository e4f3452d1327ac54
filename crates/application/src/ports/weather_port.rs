//! Weather service port
//!
//! Defines the interface for weather data retrieval by city name.

use async_trait::async_trait;
use domain::value_objects::{CityName, GeoLocation};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current weather conditions for a resolved city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// City name as resolved by the provider
    pub city: String,
    /// Geographic position of the city
    pub location: GeoLocation,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Relative humidity in percent (0-100)
    pub humidity: f64,
    /// Atmospheric pressure in hPa
    pub pressure: f64,
    /// Raw English weather description
    pub description: String,
}

/// One 3-hour forecast slot, undecoded timestamp included
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Provider timestamp string, "YYYY-MM-DD HH:MM:SS"
    pub dt_txt: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Raw English weather description
    pub description: String,
}

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a city
    async fn current_conditions(
        &self,
        city: &CityName,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Get the 5-day/3-hour forecast for a city, in provider order
    async fn forecast(&self, city: &CityName) -> Result<Vec<ForecastSample>, ApplicationError>;
}
