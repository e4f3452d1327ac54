//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Provides current conditions and the 5-day/3-hour forecast for a city
//! name, in metric units. Requires an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, WeatherApi, WeatherConfig, WeatherError};
pub use models::{
    Coordinates, CurrentResponse, ForecastEntry, ForecastResponse, MainData, WeatherDescription,
    Wind,
};
