//! Current-weather reading for a single city

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// One city's current weather, as resolved by the provider
///
/// Constructed only from a successful API response carrying the expected
/// status marker. Immutable; rebuilt on every query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityReading {
    /// City name as resolved by the provider (may differ from the query)
    pub city: String,
    /// Geographic position of the city
    pub location: GeoLocation,
    /// Temperature in °C
    pub temperature: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Atmospheric pressure in hPa
    pub pressure: f64,
    /// Weather description as returned by the provider
    pub description: String,
    /// Localized weather description
    pub description_localized: String,
}

impl CityReading {
    /// One-line summary of all six fields, using the localized description
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {} | {:.1}°C | wind {:.1} m/s | humidity {:.0}% | pressure {:.0} hPa",
            self.city,
            self.description_localized,
            self.temperature,
            self.wind_speed,
            self.humidity,
            self.pressure
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_contains_all_fields() {
        let reading = CityReading {
            city: "London".to_string(),
            location: GeoLocation::new(51.5074, -0.1278).expect("valid coordinates"),
            temperature: 12.3,
            wind_speed: 5.6,
            humidity: 81.0,
            pressure: 1008.0,
            description: "shower rain".to_string(),
            description_localized: "Showers".to_string(),
        };

        let summary = reading.summary();
        assert!(summary.contains("London"));
        assert!(summary.contains("Showers"));
        assert!(summary.contains("12.3°C"));
        assert!(summary.contains("5.6 m/s"));
        assert!(summary.contains("81%"));
        assert!(summary.contains("1008 hPa"));
    }
}
