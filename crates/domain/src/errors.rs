//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// City name was empty or whitespace-only
    #[error("Invalid city name: {0:?}")]
    InvalidCityName(String),

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Timestamp string did not match the expected format
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_city_name_message() {
        let err = DomainError::InvalidCityName("   ".to_string());
        assert_eq!(err.to_string(), "Invalid city name: \"   \"");
    }

    #[test]
    fn invalid_coordinates_message() {
        let err = DomainError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));
    }
}
