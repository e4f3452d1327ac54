//! Metric comparison bar chart
//!
//! One bar per city for the selected metric, in the metric's fixed color,
//! with the value printed above each bar and the city name below it.
//! Negative values (winter temperatures) hang below the zero baseline.

use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::text::Shaping;
use iced::{alignment, Color, Point, Rectangle, Renderer, Size, Theme};

use application::CurrentSeries;
use domain::Metric;

use super::scale;

const MARGIN_LEFT: f32 = 52.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 30.0;
const MARGIN_BOTTOM: f32 = 28.0;
const GRID_STEPS: u32 = 4;

/// Canvas program for the per-metric bar chart
#[derive(Debug)]
pub struct BarChart {
    title: String,
    labels: Vec<String>,
    values: Vec<f64>,
    color: Color,
}

impl BarChart {
    /// Build the chart from a current-weather series
    pub fn new(series: &CurrentSeries) -> Self {
        let (r, g, b) = series.metric.bar_color();
        Self {
            title: Self::title_for(series.metric),
            labels: series.readings.iter().map(|c| c.city.clone()).collect(),
            values: series.values.clone(),
            color: Color::from_rgb8(r, g, b),
        }
    }

    fn title_for(metric: Metric) -> String {
        format!("{} by city ({})", metric.label(), metric.unit())
    }

    /// Bar domain: always includes zero so bar lengths stay comparable
    fn value_domain(&self) -> (f64, f64) {
        let mut lo = 0.0_f64;
        let mut hi = 0.0_f64;
        for &v in &self.values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        let pad = ((hi - lo) * 0.1).max(1.0);
        let lo = if lo < 0.0 { lo - pad } else { lo };
        (lo, hi + pad)
    }
}

impl<Message> canvas::Program<Message> for BarChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let left = MARGIN_LEFT;
        let right = (frame.width() - MARGIN_RIGHT).max(left);
        let top = MARGIN_TOP;
        let bottom = (frame.height() - MARGIN_BOTTOM).max(top);
        let domain = self.value_domain();
        let y_of = |v: f64| scale(v, domain, (bottom, top));

        frame.fill_text(canvas::Text {
            content: self.title.clone(),
            position: Point::new((left + right) / 2.0, 8.0),
            color: Color::from_rgb8(0x20, 0x2A, 0x33),
            size: 14.0.into(),
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Top,
            shaping: Shaping::Advanced,
            ..canvas::Text::default()
        });

        let grid_stroke = Stroke::default()
            .with_width(1.0)
            .with_color(Color::from_rgb8(0xDD, 0xE3, 0xE9));
        for step in 0..=GRID_STEPS {
            let v = domain.0 + (domain.1 - domain.0) * f64::from(step) / f64::from(GRID_STEPS);
            let y = y_of(v);
            let line = Path::line(Point::new(left, y), Point::new(right, y));
            frame.stroke(&line, grid_stroke.clone());
            frame.fill_text(canvas::Text {
                content: format!("{v:.0}"),
                position: Point::new(left - 6.0, y),
                color: Color::from_rgb8(0x5A, 0x66, 0x72),
                size: 10.0.into(),
                horizontal_alignment: alignment::Horizontal::Right,
                vertical_alignment: alignment::Vertical::Center,
                ..canvas::Text::default()
            });
        }

        let n = self.values.len();
        if n == 0 {
            return vec![frame.into_geometry()];
        }
        let slot = (right - left) / n as f32;
        let bar_width = slot * 0.6;
        let baseline = y_of(0.0);

        for (i, (&value, label)) in self.values.iter().zip(&self.labels).enumerate() {
            let center = left + (i as f32 + 0.5) * slot;
            let y = y_of(value);
            let (bar_top, bar_height) = if y <= baseline {
                (y, baseline - y)
            } else {
                (baseline, y - baseline)
            };
            frame.fill_rectangle(
                Point::new(center - bar_width / 2.0, bar_top),
                Size::new(bar_width, bar_height),
                self.color,
            );
            frame.fill_text(canvas::Text {
                content: format!("{value:.1}"),
                position: Point::new(center, y - 4.0),
                color: Color::from_rgb8(0x20, 0x2A, 0x33),
                size: 11.0.into(),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Bottom,
                ..canvas::Text::default()
            });
            frame.fill_text(canvas::Text {
                content: label.clone(),
                position: Point::new(center, bottom + 4.0),
                color: Color::from_rgb8(0x20, 0x2A, 0x33),
                size: 11.0.into(),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Top,
                shaping: Shaping::Advanced,
                ..canvas::Text::default()
            });
        }

        let axis = Path::line(Point::new(left, baseline), Point::new(right, baseline));
        frame.stroke(
            &axis,
            Stroke::default()
                .with_width(1.0)
                .with_color(Color::from_rgb8(0x8A, 0x96, 0xA3)),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(values: Vec<f64>) -> BarChart {
        BarChart {
            title: String::new(),
            labels: values.iter().map(|v| format!("{v}")).collect(),
            values,
            color: Color::BLACK,
        }
    }

    #[test]
    fn domain_always_spans_zero() {
        let (lo, hi) = chart(vec![5.0, 10.0]).value_domain();
        assert!(lo <= 0.0);
        assert!(hi > 10.0);
    }

    #[test]
    fn domain_extends_below_zero_for_negative_values() {
        let (lo, hi) = chart(vec![-12.0, 3.0]).value_domain();
        assert!(lo < -12.0);
        assert!(hi > 3.0);
    }

    #[test]
    fn empty_series_has_a_usable_domain() {
        let (lo, hi) = chart(Vec::new()).value_domain();
        assert!(lo < hi);
    }

    #[test]
    fn title_names_metric_and_unit() {
        assert_eq!(
            BarChart::title_for(Metric::WindSpeed),
            "Wind speed by city (m/s)"
        );
    }
}
