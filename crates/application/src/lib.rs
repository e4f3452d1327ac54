//! Application layer - Use cases and orchestration
//!
//! Contains the data-to-chart transformation pipeline, the description
//! translator, and the port the weather integration is wired through.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
