//! Series builder - the data-to-chart transformation pipeline
//!
//! Turns one or more cities' provider payloads into plotting-ready series:
//! per-city scalar readings for the current-weather view, per-city time
//! series plus daily aggregates for the forecast view. Cities are processed
//! strictly in input order; a failing city contributes nothing to any series
//! and is reported through a [`QueryNotice`] without affecting its siblings.

use std::sync::Arc;

use domain::{CityName, CityReading, DailySummary, ForecastPoint, Metric};
use tracing::{instrument, warn};

use crate::ports::{CurrentConditions, ForecastSample, WeatherPort};
use crate::services::DescriptionTranslator;

/// How a notice should be presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    /// A city was skipped entirely
    Error,
    /// Data is usable but may render inconsistently
    Warning,
}

/// User-facing notice produced while building a series
#[derive(Debug, Clone)]
pub struct QueryNotice {
    /// Presentation severity
    pub severity: NoticeSeverity,
    /// The city the notice is about
    pub city: String,
    /// Human-readable detail, including the underlying error text
    pub message: String,
}

impl QueryNotice {
    fn error(city: &CityName, message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            city: city.to_string(),
            message: message.into(),
        }
    }

    fn warning(city: &CityName, message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Warning,
            city: city.to_string(),
            message: message.into(),
        }
    }

    /// One-line presentation of the notice
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{}: {}", self.city, self.message)
    }
}

/// Output of the current-weather pipeline
#[derive(Debug, Clone)]
pub struct CurrentSeries {
    /// The metric the bar chart compares
    pub metric: Metric,
    /// Successful readings, in input order minus skipped cities
    pub readings: Vec<CityReading>,
    /// Selected-metric values, aligned to `readings`
    pub values: Vec<f64>,
    /// Per-city errors collected along the way
    pub notices: Vec<QueryNotice>,
}

impl CurrentSeries {
    /// True when no city produced a reading
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// One city's forecast time series
#[derive(Debug, Clone)]
pub struct CityForecast {
    /// The city as queried
    pub city: String,
    /// 3-hour samples in provider order
    pub points: Vec<ForecastPoint>,
}

/// Output of the forecast pipeline
#[derive(Debug, Clone)]
pub struct ForecastSeries {
    /// Canonical x-axis labels, taken from the first city with data
    pub labels: Vec<String>,
    /// Per-city temperature series, in input order minus skipped cities
    pub cities: Vec<CityForecast>,
    /// Daily aggregates in city-then-day order
    pub summaries: Vec<DailySummary>,
    /// Per-city errors and cross-city consistency warnings
    pub notices: Vec<QueryNotice>,
}

impl ForecastSeries {
    /// True when no city produced a series
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Builds plotting-ready series from weather port responses
pub struct SeriesBuilder {
    port: Arc<dyn WeatherPort>,
    translator: DescriptionTranslator,
}

impl std::fmt::Debug for SeriesBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesBuilder")
            .field("translator", &self.translator)
            .finish_non_exhaustive()
    }
}

impl SeriesBuilder {
    /// Create a builder over a weather port and a description translator
    #[must_use]
    pub fn new(port: Arc<dyn WeatherPort>, translator: DescriptionTranslator) -> Self {
        Self { port, translator }
    }

    /// Build the current-weather series for the given cities and metric
    ///
    /// Cities are fetched sequentially in input order. A failing city yields
    /// exactly one error notice and no reading.
    #[instrument(skip(self, cities), fields(count = cities.len()))]
    pub async fn build_current(&self, cities: &[CityName], metric: Metric) -> CurrentSeries {
        let mut readings = Vec::with_capacity(cities.len());
        let mut notices = Vec::new();

        for city in cities {
            match self.port.current_conditions(city).await {
                Ok(conditions) => readings.push(self.to_reading(conditions)),
                Err(e) => {
                    warn!(city = %city, error = %e, "Skipping city in current-weather series");
                    notices.push(QueryNotice::error(
                        city,
                        format!("Could not fetch current weather. {e}"),
                    ));
                }
            }
        }

        let values = readings.iter().map(|r| metric.value_of(r)).collect();

        CurrentSeries {
            metric,
            readings,
            values,
            notices,
        }
    }

    /// Build the forecast series for the given cities
    ///
    /// The first city with data defines the canonical date-label axis; a
    /// later city whose label sequence differs gets a warning notice but is
    /// still charted.
    #[instrument(skip(self, cities), fields(count = cities.len()))]
    pub async fn build_forecast(&self, cities: &[CityName]) -> ForecastSeries {
        let mut labels: Vec<String> = Vec::new();
        let mut out = Vec::with_capacity(cities.len());
        let mut summaries = Vec::new();
        let mut notices = Vec::new();

        for city in cities {
            let samples = match self.port.forecast(city).await {
                Ok(samples) => samples,
                Err(e) => {
                    warn!(city = %city, error = %e, "Skipping city in forecast series");
                    notices.push(QueryNotice::error(
                        city,
                        format!("Could not fetch forecast. {e}"),
                    ));
                    continue;
                }
            };

            let points = match self.to_points(&samples) {
                Ok(points) => points,
                Err(detail) => {
                    warn!(city = %city, detail, "Skipping city with malformed forecast payload");
                    notices.push(QueryNotice::error(
                        city,
                        format!("Malformed forecast payload. {detail}"),
                    ));
                    continue;
                }
            };

            let city_labels: Vec<String> = points.iter().map(ForecastPoint::date_label).collect();
            if labels.is_empty() {
                labels = city_labels;
            } else if labels != city_labels {
                notices.push(QueryNotice::warning(
                    city,
                    "Forecast dates differ from the other cities; charts may misalign.",
                ));
            }

            summaries.extend(DailySummary::bucket(city.as_str(), &points));
            out.push(CityForecast {
                city: city.to_string(),
                points,
            });
        }

        ForecastSeries {
            labels,
            cities: out,
            summaries,
            notices,
        }
    }

    fn to_reading(&self, conditions: CurrentConditions) -> CityReading {
        let description_localized = self.translator.translate(&conditions.description);
        CityReading {
            city: conditions.city,
            location: conditions.location,
            temperature: conditions.temperature,
            wind_speed: conditions.wind_speed,
            humidity: conditions.humidity,
            pressure: conditions.pressure,
            description: conditions.description,
            description_localized,
        }
    }

    /// Decode a city's samples; any bad timestamp rejects the whole city
    fn to_points(&self, samples: &[ForecastSample]) -> Result<Vec<ForecastPoint>, String> {
        samples
            .iter()
            .map(|sample| {
                let timestamp =
                    ForecastPoint::parse_timestamp(&sample.dt_txt).map_err(|e| e.to_string())?;
                Ok(ForecastPoint {
                    timestamp,
                    temperature: sample.temperature,
                    description: self.translator.translate(&sample.description),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::MockWeatherPort;
    use domain::GeoLocation;

    fn conditions(city: &str, temp: f64) -> CurrentConditions {
        CurrentConditions {
            city: city.to_string(),
            location: GeoLocation::new(52.52, 13.405).expect("valid coordinates"),
            temperature: temp,
            wind_speed: 3.0,
            humidity: 55.0,
            pressure: 1012.0,
            description: "clear sky".to_string(),
        }
    }

    fn samples(n: usize) -> Vec<ForecastSample> {
        (0..n)
            .map(|i| ForecastSample {
                dt_txt: format!("2023-10-{:02} {:02}:00:00", 10 + i / 8, (i % 8) * 3),
                temperature: 10.0 + i as f64,
                description: "rain".to_string(),
            })
            .collect()
    }

    fn cities(names: &[&str]) -> Vec<CityName> {
        names
            .iter()
            .map(|n| CityName::new(*n).expect("valid name"))
            .collect()
    }

    fn builder(port: MockWeatherPort) -> SeriesBuilder {
        SeriesBuilder::new(Arc::new(port), DescriptionTranslator::default())
    }

    #[tokio::test]
    async fn failing_city_yields_one_notice_and_no_reading() {
        let mut port = MockWeatherPort::new();
        port.expect_current_conditions()
            .returning(|city| match city.as_str() {
                "Zzzzinvalid" => Err(ApplicationError::ExternalService(
                    "HTTP 404 Not Found".to_string(),
                )),
                other => Ok(conditions(other, 20.0)),
            });

        let series = builder(port)
            .build_current(&cities(&["Zzzzinvalid", "Berlin"]), Metric::Temperature)
            .await;

        assert_eq!(series.readings.len(), 1);
        assert_eq!(series.readings[0].city, "Berlin");
        assert_eq!(series.notices.len(), 1);
        assert_eq!(series.notices[0].severity, NoticeSeverity::Error);
        assert_eq!(series.notices[0].city, "Zzzzinvalid");
        assert!(series.notices[0].message.contains("404"));
    }

    #[tokio::test]
    async fn readings_preserve_input_order() {
        let mut port = MockWeatherPort::new();
        port.expect_current_conditions()
            .returning(|city| Ok(conditions(city.as_str(), 10.0)));

        let series = builder(port)
            .build_current(&cities(&["Tokyo", "Berlin", "London"]), Metric::Temperature)
            .await;

        let names: Vec<&str> = series.readings.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(names, vec!["Tokyo", "Berlin", "London"]);
        assert!(series.notices.is_empty());
    }

    #[tokio::test]
    async fn values_follow_the_selected_metric() {
        let mut port = MockWeatherPort::new();
        port.expect_current_conditions()
            .returning(|city| Ok(conditions(city.as_str(), 25.0)));

        let by_temp = builder(port)
            .build_current(&cities(&["Berlin"]), Metric::Temperature)
            .await;
        assert_eq!(by_temp.values, vec![25.0]);

        let mut port = MockWeatherPort::new();
        port.expect_current_conditions()
            .returning(|city| Ok(conditions(city.as_str(), 25.0)));

        let by_humidity = builder(port)
            .build_current(&cities(&["Berlin"]), Metric::Humidity)
            .await;
        assert_eq!(by_humidity.values, vec![55.0]);
    }

    #[tokio::test]
    async fn descriptions_are_localized_in_readings() {
        let mut port = MockWeatherPort::new();
        port.expect_current_conditions()
            .returning(|city| Ok(conditions(city.as_str(), 20.0)));

        let series = builder(port)
            .build_current(&cities(&["Berlin"]), Metric::Temperature)
            .await;

        assert_eq!(series.readings[0].description, "clear sky");
        assert_eq!(series.readings[0].description_localized, "Clear");
    }

    #[tokio::test]
    async fn forecast_builds_labels_points_and_summaries() {
        let mut port = MockWeatherPort::new();
        port.expect_forecast().returning(|_| Ok(samples(16)));

        let series = builder(port).build_forecast(&cities(&["Berlin"])).await;

        assert_eq!(series.cities.len(), 1);
        assert_eq!(series.cities[0].points.len(), 16);
        assert_eq!(series.labels.len(), 16);
        assert_eq!(series.labels[0], "10-10 00:00");
        // 16 points in chunks of 8 -> two daily summaries
        assert_eq!(series.summaries.len(), 2);
        assert_eq!(series.summaries[0].city, "Berlin");
        assert_eq!(series.summaries[0].dominant_description, "Rain");
    }

    #[tokio::test]
    async fn forecast_failing_city_is_skipped_with_notice() {
        let mut port = MockWeatherPort::new();
        port.expect_forecast().returning(|city| {
            if city.as_str() == "Zzzzinvalid" {
                Err(ApplicationError::ExternalService("HTTP 404".to_string()))
            } else {
                Ok(samples(8))
            }
        });

        let series = builder(port)
            .build_forecast(&cities(&["Zzzzinvalid", "Berlin"]))
            .await;

        assert_eq!(series.cities.len(), 1);
        assert_eq!(series.cities[0].city, "Berlin");
        assert_eq!(series.notices.len(), 1);
        assert_eq!(series.notices[0].severity, NoticeSeverity::Error);
        // Canonical labels come from the surviving city
        assert_eq!(series.labels.len(), 8);
        assert_eq!(series.summaries.len(), 1);
    }

    #[tokio::test]
    async fn mismatched_label_sequences_warn_but_still_chart() {
        let mut port = MockWeatherPort::new();
        port.expect_forecast().returning(|city| {
            if city.as_str() == "Berlin" {
                Ok(samples(16))
            } else {
                Ok(samples(8))
            }
        });

        let series = builder(port)
            .build_forecast(&cities(&["Berlin", "London"]))
            .await;

        assert_eq!(series.cities.len(), 2);
        assert_eq!(series.labels.len(), 16);
        let warnings: Vec<&QueryNotice> = series
            .notices
            .iter()
            .filter(|n| n.severity == NoticeSeverity::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].city, "London");
    }

    #[tokio::test]
    async fn malformed_timestamp_rejects_the_whole_city() {
        let mut port = MockWeatherPort::new();
        port.expect_forecast().returning(|city| {
            if city.as_str() == "Broken" {
                Ok(vec![ForecastSample {
                    dt_txt: "garbage".to_string(),
                    temperature: 1.0,
                    description: "rain".to_string(),
                }])
            } else {
                Ok(samples(8))
            }
        });

        let series = builder(port)
            .build_forecast(&cities(&["Broken", "Berlin"]))
            .await;

        assert_eq!(series.cities.len(), 1);
        assert_eq!(series.cities[0].city, "Berlin");
        assert_eq!(series.notices.len(), 1);
        assert!(series.notices[0].message.contains("Malformed"));
    }

    #[tokio::test]
    async fn summaries_are_in_city_then_day_order() {
        let mut port = MockWeatherPort::new();
        port.expect_forecast().returning(|_| Ok(samples(16)));

        let series = builder(port)
            .build_forecast(&cities(&["Berlin", "London"]))
            .await;

        let order: Vec<(&str, &str)> = series
            .summaries
            .iter()
            .map(|s| (s.city.as_str(), s.day.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Berlin", "10-10"),
                ("Berlin", "10-11"),
                ("London", "10-10"),
                ("London", "10-11"),
            ]
        );
    }

    #[tokio::test]
    async fn empty_city_list_builds_empty_series() {
        let port = MockWeatherPort::new();
        let series = builder(port).build_forecast(&[]).await;
        assert!(series.is_empty());
        assert!(series.labels.is_empty());
        assert!(series.notices.is_empty());
    }
}
