//! Application services - Use case implementations

mod series_service;
mod translator;

pub use series_service::{
    CityForecast, CurrentSeries, ForecastSeries, NoticeSeverity, QueryNotice, SeriesBuilder,
};
pub use translator::DescriptionTranslator;
