//! World-map scatter chart
//!
//! Plots each city at its (longitude, latitude) on an equirectangular
//! plate with a light graticule, labelled "City - 18.5°C".

use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::text::Shaping;
use iced::{alignment, Color, Point, Rectangle, Renderer, Size, Theme};

use domain::CityReading;

use super::{city_color, scale};

const MARGIN: f32 = 14.0;

#[derive(Debug)]
struct PlottedCity {
    label: String,
    latitude: f64,
    longitude: f64,
    color: Color,
}

/// Canvas program for the current-weather map
#[derive(Debug)]
pub struct MapChart {
    cities: Vec<PlottedCity>,
}

impl MapChart {
    /// Build the chart from successful readings, in input order
    pub fn new(readings: &[CityReading]) -> Self {
        let cities = readings
            .iter()
            .enumerate()
            .map(|(index, reading)| PlottedCity {
                label: format!("{} - {:.1}°C", reading.city, reading.temperature),
                latitude: reading.location.latitude(),
                longitude: reading.location.longitude(),
                color: city_color(index),
            })
            .collect();
        Self { cities }
    }
}

impl<Message> canvas::Program<Message> for MapChart {
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
        let plot = Rectangle {
            x: MARGIN,
            y: MARGIN,
            width: (frame.width() - 2.0 * MARGIN).max(0.0),
            height: (frame.height() - 2.0 * MARGIN).max(0.0),
        };

        frame.fill_rectangle(
            Point::new(plot.x, plot.y),
            Size::new(plot.width, plot.height),
            Color::from_rgb8(0xF2, 0xF6, 0xFA),
        );

        let grid_stroke = Stroke::default()
            .with_width(1.0)
            .with_color(Color::from_rgb8(0xD5, 0xDD, 0xE5));
        for lon in (-180..=180).step_by(60) {
            let x = scale(f64::from(lon), (-180.0, 180.0), (plot.x, plot.x + plot.width));
            let line = Path::line(Point::new(x, plot.y), Point::new(x, plot.y + plot.height));
            frame.stroke(&line, grid_stroke.clone());
        }
        for lat in (-90..=90).step_by(30) {
            let y = scale(f64::from(lat), (90.0, -90.0), (plot.y, plot.y + plot.height));
            let line = Path::line(Point::new(plot.x, y), Point::new(plot.x + plot.width, y));
            frame.stroke(&line, grid_stroke.clone());
        }

        let border = Path::rectangle(
            Point::new(plot.x, plot.y),
            Size::new(plot.width, plot.height),
        );
        frame.stroke(
            &border,
            Stroke::default()
                .with_width(1.0)
                .with_color(Color::from_rgb8(0x8A, 0x96, 0xA3)),
        );

        for city in &self.cities {
            let x = scale(
                city.longitude,
                (-180.0, 180.0),
                (plot.x, plot.x + plot.width),
            );
            let y = scale(city.latitude, (90.0, -90.0), (plot.y, plot.y + plot.height));

            frame.fill(&Path::circle(Point::new(x, y), 5.0), city.color);
            frame.fill_text(canvas::Text {
                content: city.label.clone(),
                position: Point::new(x + 8.0, y - 16.0),
                color: Color::from_rgb8(0x20, 0x2A, 0x33),
                size: 12.0.into(),
                horizontal_alignment: alignment::Horizontal::Left,
                vertical_alignment: alignment::Vertical::Top,
                shaping: Shaping::Advanced,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
