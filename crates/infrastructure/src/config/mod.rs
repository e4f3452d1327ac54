//! Application configuration
//!
//! Settings are layered: built-in defaults, then an optional `config.toml`,
//! then `WEATHERMAP__`-prefixed environment variables (e.g.
//! `WEATHERMAP__WEATHER__API_KEY`). The provider API key is deliberately not
//! a compiled-in constant.

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// Main window settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Initial window width in logical pixels
    #[serde(default = "default_window_width")]
    pub width: f32,

    /// Initial window height in logical pixels
    #[serde(default = "default_window_height")]
    pub height: f32,
}

const fn default_window_width() -> f32 {
    1024.0
}

const fn default_window_height() -> f32 {
    720.0
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Top-level application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// Window configuration
    #[serde(default)]
    pub window: WindowSettings,
}

impl Settings {
    /// Load configuration from the optional `config.toml` and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_builder(config::File::with_name("config").required(false))
    }

    /// Load configuration from a specific file path (used by tests)
    pub fn load_from(path: &std::path::Path) -> Result<Self, config::ConfigError> {
        Self::from_builder(config::File::from(path).required(true))
    }

    fn from_builder(
        file: config::File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults; the API key has none and must be provided
            .set_default("weather.api_key", "")?
            // Load from file if it exists
            .add_source(file)
            // Override with environment variables (e.g., WEATHERMAP__WEATHER__API_KEY)
            .add_source(
                config::Environment::with_prefix("WEATHERMAP")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Whether a provider API key has been configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.weather.api_key.trim().is_empty()
    }
}
