//! Daily aggregate over a city's forecast points

use serde::{Deserialize, Serialize};

use crate::entities::ForecastPoint;

/// Forecast samples per bucketed day
///
/// The provider delivers one sample every 3 hours, so 8 consecutive samples
/// approximate one day. Buckets are positional, not calendar-aligned: if the
/// sequence does not start at a day boundary the buckets drift with it. This
/// imprecision is deliberate and documented behavior.
pub const POINTS_PER_DAY: usize = 8;

/// Mean temperature and dominant description for one bucketed day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    /// City the summary belongs to
    pub city: String,
    /// Day label ("MM-DD"), taken from the bucket's first point
    pub day: String,
    /// Arithmetic mean of the bucket's temperatures in °C
    pub mean_temperature: f64,
    /// Most frequent description in the bucket; ties broken by first occurrence
    pub dominant_description: String,
}

impl DailySummary {
    /// Derive daily summaries by slicing a forecast sequence into consecutive
    /// chunks of [`POINTS_PER_DAY`]
    ///
    /// Emits `ceil(N / 8)` summaries for N points; the final bucket may hold
    /// fewer than 8 points. Empty input yields no summaries.
    #[must_use]
    pub fn bucket(city: &str, points: &[ForecastPoint]) -> Vec<Self> {
        points
            .chunks(POINTS_PER_DAY)
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| Self {
                city: city.to_string(),
                day: chunk[0].day_label(),
                mean_temperature: mean_temperature(chunk),
                dominant_description: dominant_description(chunk),
            })
            .collect()
    }

    /// Mean temperature formatted to 2 decimal places
    #[must_use]
    pub fn formatted_mean(&self) -> String {
        format!("{:.2}°C", self.mean_temperature)
    }
}

fn mean_temperature(chunk: &[ForecastPoint]) -> f64 {
    let sum: f64 = chunk.iter().map(|p| p.temperature).sum();
    sum / chunk.len() as f64
}

/// Most frequent description in the chunk
///
/// A stable scan over first occurrences guarantees that ties resolve to the
/// description seen earliest in the chunk.
fn dominant_description(chunk: &[ForecastPoint]) -> String {
    let mut seen: Vec<(&str, usize)> = Vec::new();
    for point in chunk {
        match seen.iter_mut().find(|(desc, _)| *desc == point.description) {
            Some((_, count)) => *count += 1,
            None => seen.push((&point.description, 1)),
        }
    }
    seen.iter()
        .max_by_key(|(_, count)| *count)
        .map(|(desc, _)| (*desc).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ForecastPoint;
    use chrono::{Duration, NaiveDate};

    fn points(specs: &[(f64, &str)]) -> Vec<ForecastPoint> {
        let start = NaiveDate::from_ymd_opt(2023, 10, 10)
            .expect("valid date")
            .and_hms_opt(0, 0, 0)
            .expect("valid time");
        specs
            .iter()
            .enumerate()
            .map(|(i, (temp, desc))| ForecastPoint {
                timestamp: start + Duration::hours(3 * i as i64),
                temperature: *temp,
                description: (*desc).to_string(),
            })
            .collect()
    }

    fn uniform_points(n: usize) -> Vec<ForecastPoint> {
        points(&vec![(10.0, "Clear"); n])
    }

    #[test]
    fn emits_ceil_n_over_8_summaries() {
        assert_eq!(DailySummary::bucket("X", &uniform_points(40)).len(), 5);
        assert_eq!(DailySummary::bucket("X", &uniform_points(8)).len(), 1);
        assert_eq!(DailySummary::bucket("X", &uniform_points(9)).len(), 2);
        assert_eq!(DailySummary::bucket("X", &uniform_points(7)).len(), 1);
        assert_eq!(DailySummary::bucket("X", &uniform_points(17)).len(), 3);
    }

    #[test]
    fn empty_sequence_yields_no_summaries() {
        assert!(DailySummary::bucket("X", &[]).is_empty());
    }

    #[test]
    fn mean_is_arithmetic_mean_of_bucket() {
        let pts = points(&[(10.0, "a"), (12.0, "a"), (14.0, "a"), (16.0, "a")]);
        let summaries = DailySummary::bucket("Berlin", &pts);
        assert_eq!(summaries.len(), 1);
        assert!((summaries[0].mean_temperature - 13.0).abs() < f64::EPSILON);
        assert_eq!(summaries[0].formatted_mean(), "13.00°C");
    }

    #[test]
    fn dominant_description_tie_breaks_on_first_occurrence() {
        let pts = points(&[(1.0, "rain"), (1.0, "rain"), (1.0, "clear"), (1.0, "clear")]);
        let summaries = DailySummary::bucket("Berlin", &pts);
        assert_eq!(summaries[0].dominant_description, "rain");
    }

    #[test]
    fn dominant_description_picks_majority() {
        let pts = points(&[(1.0, "clear"), (1.0, "rain"), (1.0, "rain")]);
        let summaries = DailySummary::bucket("Berlin", &pts);
        assert_eq!(summaries[0].dominant_description, "rain");
    }

    #[test]
    fn day_label_comes_from_first_point_of_each_bucket() {
        // 16 points at 3h cadence starting at midnight: two exact days
        let summaries = DailySummary::bucket("Berlin", &uniform_points(16));
        assert_eq!(summaries[0].day, "10-10");
        assert_eq!(summaries[1].day, "10-11");
    }

    #[test]
    fn buckets_are_positional_not_calendar_aligned() {
        // Start at 12:00; the first bucket then spans into the next calendar
        // day but still carries the first point's day label.
        let start = NaiveDate::from_ymd_opt(2023, 10, 10)
            .expect("valid date")
            .and_hms_opt(12, 0, 0)
            .expect("valid time");
        let pts: Vec<ForecastPoint> = (0..16)
            .map(|i| ForecastPoint {
                timestamp: start + Duration::hours(3 * i),
                temperature: 5.0,
                description: "Clear".to_string(),
            })
            .collect();

        let summaries = DailySummary::bucket("Berlin", &pts);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].day, "10-10");
        assert_eq!(summaries[1].day, "10-11");
    }
}
