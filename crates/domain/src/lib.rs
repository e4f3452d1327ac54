//! Domain layer for Weather IntelliMap
//!
//! Contains the weather entities, value objects, and domain errors.
//! This layer has no external dependencies beyond serialization and time.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
