//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in
    /// [-90, 90] or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinates() {
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(52.52, 13.405).is_ok());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn rejection_is_the_domain_coordinate_error() {
        let err = GeoLocation::new(123.0, 0.0).expect_err("out of range");
        assert!(matches!(err, DomainError::InvalidCoordinates));
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn accessors_return_components() {
        let loc = GeoLocation::new(51.5074, -0.1278).expect("valid coordinates");
        assert!((loc.latitude() - 51.5074).abs() < f64::EPSILON);
        assert!((loc.longitude() - -0.1278).abs() < f64::EPSILON);
    }
}
