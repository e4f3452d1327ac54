//! 5-day temperature trend chart
//!
//! One polyline per city over the canonical date-label axis, with point
//! markers, a thinned set of x-axis labels, and a legend in the top-left
//! corner. Cities keep their palette color from input order.

use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::text::Shaping;
use iced::{alignment, Color, Point, Rectangle, Renderer, Size, Theme};

use application::ForecastSeries;

use super::{city_color, label_stride, padded_domain, scale};

const MARGIN_LEFT: f32 = 52.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 30.0;
const MARGIN_BOTTOM: f32 = 36.0;
const GRID_STEPS: u32 = 4;
const MAX_X_LABELS: usize = 8;

#[derive(Debug)]
struct CityLine {
    name: String,
    temperatures: Vec<f64>,
    color: Color,
}

/// Canvas program for the multi-city temperature trend
#[derive(Debug)]
pub struct TrendChart {
    labels: Vec<String>,
    cities: Vec<CityLine>,
}

impl TrendChart {
    /// Build the chart from a forecast series
    pub fn new(series: &ForecastSeries) -> Self {
        let cities = series
            .cities
            .iter()
            .enumerate()
            .map(|(index, forecast)| CityLine {
                name: forecast.city.clone(),
                temperatures: forecast.points.iter().map(|p| p.temperature).collect(),
                color: city_color(index),
            })
            .collect();
        Self {
            labels: series.labels.clone(),
            cities,
        }
    }

    /// Temperature domain across all cities, padded
    fn value_domain(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for city in &self.cities {
            for &t in &city.temperatures {
                min = min.min(t);
                max = max.max(t);
            }
        }
        padded_domain(min, max)
    }

    /// Shared x-slot count; mismatched cities are drawn against it as-is
    fn slot_count(&self) -> usize {
        self.cities
            .iter()
            .map(|c| c.temperatures.len())
            .chain(std::iter::once(self.labels.len()))
            .max()
            .unwrap_or(0)
    }
}

impl<Message> canvas::Program<Message> for TrendChart {
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

        let slots = self.slot_count();
        if slots == 0 {
            return vec![frame.into_geometry()];
        }
        let denominator = (slots - 1).max(1) as f32;
        let x_of = |i: usize| left + (right - left) * i as f32 / denominator;

        let domain = self.value_domain();
        let y_of = |v: f64| scale(v, domain, (bottom, top));

        frame.fill_text(canvas::Text {
            content: "5-day temperature trend (°C)".to_string(),
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
                content: format!("{v:.1}"),
                position: Point::new(left - 6.0, y),
                color: Color::from_rgb8(0x5A, 0x66, 0x72),
                size: 10.0.into(),
                horizontal_alignment: alignment::Horizontal::Right,
                vertical_alignment: alignment::Vertical::Center,
                ..canvas::Text::default()
            });
        }

        let stride = label_stride(self.labels.len(), MAX_X_LABELS);
        for (i, label) in self.labels.iter().enumerate().step_by(stride) {
            frame.fill_text(canvas::Text {
                content: label.clone(),
                position: Point::new(x_of(i), bottom + 6.0),
                color: Color::from_rgb8(0x5A, 0x66, 0x72),
                size: 10.0.into(),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Top,
                ..canvas::Text::default()
            });
        }

        for city in &self.cities {
            if city.temperatures.is_empty() {
                continue;
            }
            let line = Path::new(|builder| {
                builder.move_to(Point::new(x_of(0), y_of(city.temperatures[0])));
                for (i, &t) in city.temperatures.iter().enumerate().skip(1) {
                    builder.line_to(Point::new(x_of(i), y_of(t)));
                }
            });
            frame.stroke(
                &line,
                Stroke::default().with_width(2.0).with_color(city.color),
            );
            for (i, &t) in city.temperatures.iter().enumerate() {
                frame.fill(&Path::circle(Point::new(x_of(i), y_of(t)), 2.5), city.color);
            }
        }

        for (i, city) in self.cities.iter().enumerate() {
            let y = top + 6.0 + i as f32 * 16.0;
            frame.fill_rectangle(
                Point::new(left + 8.0, y),
                Size::new(10.0, 10.0),
                city.color,
            );
            frame.fill_text(canvas::Text {
                content: city.name.clone(),
                position: Point::new(left + 24.0, y - 1.0),
                color: Color::from_rgb8(0x20, 0x2A, 0x33),
                size: 11.0.into(),
                horizontal_alignment: alignment::Horizontal::Left,
                vertical_alignment: alignment::Vertical::Top,
                shaping: Shaping::Advanced,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
