//! Single 3-hour forecast sample

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// One 3-hour forecast sample for a city
///
/// The provider returns ~40 of these per city, spanning 5 days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Forecast timestamp (provider-local, no timezone attached)
    pub timestamp: NaiveDateTime,
    /// Forecast temperature in °C
    pub temperature: f64,
    /// Localized weather description
    pub description: String,
}

impl ForecastPoint {
    /// Parse the provider's `dt_txt` timestamp ("YYYY-MM-DD HH:MM:SS")
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimestamp` if the string does not match
    /// the fixed format.
    pub fn parse_timestamp(dt_txt: &str) -> Result<NaiveDateTime, DomainError> {
        NaiveDateTime::parse_from_str(dt_txt, "%Y-%m-%d %H:%M:%S")
            .map_err(|e| DomainError::InvalidTimestamp(format!("{dt_txt}: {e}")))
    }

    /// Short date-time label used on the forecast chart x-axis
    #[must_use]
    pub fn date_label(&self) -> String {
        self.timestamp.format("%m-%d %H:%M").to_string()
    }

    /// Day label used for daily summaries
    #[must_use]
    pub fn day_label(&self) -> String {
        self.timestamp.format("%m-%d").to_string()
    }
}
