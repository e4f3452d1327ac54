//! Weather IntelliMap desktop application
//!
//! Queries OpenWeatherMap for one or more cities and renders current
//! conditions on a world-map scatter plot with a metric bar chart, plus a
//! 5-day temperature trend with daily summaries.

mod app;
mod charts;
mod components;
mod view;

use std::sync::Arc;

use anyhow::Context;
use application::{DescriptionTranslator, SeriesBuilder};
use iced::Application;
use infrastructure::{Settings, WeatherAdapter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::app::{AppFlags, WeatherApp};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().context("failed to load configuration")?;
    if !settings.has_api_key() {
        anyhow::bail!(
            "no weather API key configured; set WEATHERMAP__WEATHER__API_KEY \
             or add it to config.toml"
        );
    }

    let adapter = WeatherAdapter::new(settings.weather.clone())
        .context("failed to initialize weather client")?;
    let series_builder = Arc::new(SeriesBuilder::new(
        Arc::new(adapter),
        DescriptionTranslator::default(),
    ));

    tracing::info!("Starting Weather IntelliMap");

    let mut native = iced::Settings::with_flags(AppFlags { series_builder });
    native.window.size = iced::Size::new(settings.window.width, settings.window.height);
    WeatherApp::run(native).context("event loop terminated abnormally")
}
