//! City name value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A trimmed, non-empty city name as entered by the user
///
/// City names are free text forwarded to the weather provider; the only
/// invariant enforced here is that no empty or whitespace-only name ever
/// reaches a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityName(String);

impl CityName {
    /// Create a new city name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCityName` if the trimmed input is empty.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCityName(raw));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Split a comma-separated input into city names
    ///
    /// Empty and whitespace-only entries are silently dropped; input order
    /// is preserved for the surviving names.
    #[must_use]
    pub fn parse_list(input: &str) -> Vec<Self> {
        input
            .split(',')
            .filter_map(|part| Self::new(part).ok())
            .collect()
    }

    /// Get the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
