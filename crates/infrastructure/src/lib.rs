//! Infrastructure layer - adapters and configuration
//!
//! Wires the application's ports to the weather integration and loads
//! runtime settings from file and environment.

pub mod adapters;
pub mod config;

pub use adapters::WeatherAdapter;
pub use config::Settings;
