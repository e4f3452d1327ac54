//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External weather service error (transport, HTTP status, decode,
    /// or unexpected status marker)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err = ApplicationError::from(DomainError::InvalidCoordinates);
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn external_service_error_carries_detail() {
        let err = ApplicationError::ExternalService("HTTP 404 Not Found".to_string());
        assert!(err.to_string().contains("404"));
    }
}
