//! Canvas chart programs
//!
//! Three hand-drawn charts: a world-map scatter of current conditions, a
//! bar chart comparing one metric across cities, and a multi-city
//! temperature trend line. Shared scaling and palette helpers live here.

mod bar_chart;
mod map_chart;
mod trend_chart;

pub use bar_chart::BarChart;
pub use map_chart::MapChart;
pub use trend_chart::TrendChart;

use iced::Color;

/// Per-city line and marker colors, cycled by city index
const CITY_PALETTE: [(u8, u8, u8); 10] = [
    (0x1F, 0x77, 0xB4),
    (0xFF, 0x7F, 0x0E),
    (0x2C, 0xA0, 0x2C),
    (0xD6, 0x27, 0x28),
    (0x94, 0x67, 0xBD),
    (0x8C, 0x56, 0x4B),
    (0xE3, 0x77, 0xC2),
    (0x7F, 0x7F, 0x7F),
    (0xBC, 0xBD, 0x22),
    (0x17, 0xBE, 0xCF),
];

/// Color assigned to the city at `index`, cycling through the palette
pub(crate) fn city_color(index: usize) -> Color {
    let (r, g, b) = CITY_PALETTE[index % CITY_PALETTE.len()];
    Color::from_rgb8(r, g, b)
}

/// Linearly map `value` from `domain` into `range`
///
/// The range may be inverted (e.g. screen y grows downward). A degenerate
/// domain maps everything to the range midpoint.
pub(crate) fn scale(value: f64, domain: (f64, f64), range: (f32, f32)) -> f32 {
    let span = domain.1 - domain.0;
    if span.abs() < f64::EPSILON {
        return (range.0 + range.1) / 2.0;
    }
    let t = ((value - domain.0) / span) as f32;
    range.0 + t * (range.1 - range.0)
}

/// Value domain padded by 10% on each side
///
/// Falls back to a unit domain around the value when all values are equal,
/// so flat series still render mid-chart.
pub(crate) fn padded_domain(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() || min > max {
        return (0.0, 1.0);
    }
    let span = max - min;
    let pad = if span.abs() < f64::EPSILON {
        1.0
    } else {
        span * 0.1
    };
    (min - pad, max + pad)
}

/// Step between drawn axis labels so at most `max_labels` are shown
pub(crate) fn label_stride(len: usize, max_labels: usize) -> usize {
    if len == 0 || max_labels == 0 {
        return 1;
    }
    len.div_ceil(max_labels).max(1)
}
