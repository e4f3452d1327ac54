//! Raw OpenWeatherMap payload models
//!
//! Mirrors the provider's documented JSON schema; only the fields this
//! application reads are modeled. The two endpoints disagree on the type of
//! their `cod` status marker (integer for `/weather`, string for
//! `/forecast`) and the models preserve that quirk.

use serde::Deserialize;

/// Geographic coordinates of the resolved city
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherDescription {
    /// English description, e.g. "clear sky"
    pub description: String,
}

/// The `main` block shared by both endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MainData {
    /// Temperature in °C (metric units requested)
    pub temp: f64,
    /// Relative humidity in %
    #[serde(default)]
    pub humidity: f64,
    /// Atmospheric pressure in hPa
    #[serde(default)]
    pub pressure: f64,
}

/// The `wind` block
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s (metric units requested)
    pub speed: f64,
}

/// Decoded `/weather` response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    /// Status marker; 200 on success (integer on this endpoint)
    pub cod: i64,
    /// City name as resolved by the provider
    pub name: String,
    /// Resolved coordinates
    pub coord: Coordinates,
    /// Temperature, humidity, pressure
    pub main: MainData,
    /// Wind data
    pub wind: Wind,
    /// Weather descriptions; the first entry is the primary condition
    pub weather: Vec<WeatherDescription>,
}

impl CurrentResponse {
    /// Primary weather description, if any
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.weather.first().map(|w| w.description.as_str())
    }
}

/// One 3-hour slot of the `/forecast` response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Forecast timestamp, "YYYY-MM-DD HH:MM:SS"
    pub dt_txt: String,
    /// Temperature, humidity, pressure for the slot
    pub main: MainData,
    /// Weather descriptions for the slot
    pub weather: Vec<WeatherDescription>,
}

impl ForecastEntry {
    /// Primary weather description, if any
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.weather.first().map(|w| w.description.as_str())
    }
}

/// Decoded `/forecast` response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Status marker; "200" on success (string on this endpoint)
    pub cod: String,
    /// 3-hour forecast slots, ~40 entries spanning 5 days
    pub list: Vec<ForecastEntry>,
}
