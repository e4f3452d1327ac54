//! Comparison metric value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::CityReading;

/// The current-weather quantity selected for cross-city comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Air temperature in °C
    Temperature,
    /// Wind speed in m/s
    WindSpeed,
    /// Relative humidity in %
    Humidity,
    /// Atmospheric pressure in hPa
    Pressure,
}

impl Metric {
    /// All metrics, in the order offered by the metric selector
    pub const ALL: [Self; 4] = [
        Self::Temperature,
        Self::WindSpeed,
        Self::Humidity,
        Self::Pressure,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::WindSpeed => "Wind speed",
            Self::Humidity => "Humidity",
            Self::Pressure => "Pressure",
        }
    }

    /// Measurement unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::WindSpeed => "m/s",
            Self::Humidity => "%",
            Self::Pressure => "hPa",
        }
    }

    /// Fixed bar-chart color for this metric, as an RGB triple
    #[must_use]
    pub const fn bar_color(&self) -> (u8, u8, u8) {
        match self {
            Self::Temperature => (0xAD, 0xD8, 0xE6), // light blue
            Self::WindSpeed => (0x90, 0xEE, 0x90),   // light green
            Self::Humidity => (0xF0, 0x80, 0x80),    // light coral
            Self::Pressure => (0xFF, 0xA0, 0x7A),    // light salmon
        }
    }

    /// Extract this metric's value from a city reading
    #[must_use]
    pub const fn value_of(&self, reading: &CityReading) -> f64 {
        match self {
            Self::Temperature => reading.temperature,
            Self::WindSpeed => reading.wind_speed,
            Self::Humidity => reading.humidity,
            Self::Pressure => reading.pressure,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
