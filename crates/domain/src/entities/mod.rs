//! Domain entities - weather observations derived from provider responses

mod city_reading;
mod daily_summary;
mod forecast_point;

pub use city_reading::CityReading;
pub use daily_summary::{DailySummary, POINTS_PER_DAY};
pub use forecast_point::ForecastPoint;
