//! Reusable view fragments

use application::{NoticeSeverity, QueryNotice};
use domain::{CityReading, DailySummary};
use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{theme, Alignment, Color, Element, Length};

use crate::app::Message;

const ERROR_COLOR: Color = Color::from_rgb(0.70, 0.13, 0.13);
const WARNING_COLOR: Color = Color::from_rgb(0.72, 0.45, 0.02);

/// Dismissible banner stack for query notices
pub fn notice_banners(notices: &[QueryNotice]) -> Element<'_, Message> {
    let rows: Vec<Element<'_, Message>> = notices
        .iter()
        .enumerate()
        .map(|(index, notice)| {
            let (prefix, color) = match notice.severity {
                NoticeSeverity::Error => ("Error", ERROR_COLOR),
                NoticeSeverity::Warning => ("Warning", WARNING_COLOR),
            };
            let line = row![
                text(format!("[{prefix}] {}", notice.headline()))
                    .size(14)
                    .style(theme::Text::Color(color)),
                Space::with_width(Length::Fill),
                button(text("Dismiss").size(12)).on_press(Message::DismissNotice(index)),
            ]
            .spacing(8)
            .align_items(Alignment::Center);

            container(line)
                .padding(6)
                .width(Length::Fill)
                .style(theme::Container::Box)
                .into()
        })
        .collect();

    Column::with_children(rows)
        .spacing(4)
        .width(Length::Fill)
        .into()
}

/// One card per city with its current conditions
pub fn reading_cards(readings: &[CityReading]) -> Element<'_, Message> {
    let cards: Vec<Element<'_, Message>> = readings
        .iter()
        .map(|reading| {
            let card = column![
                text(&reading.city).size(16),
                text(&reading.description_localized).size(13),
                text(format!("Temperature: {:.1}°C", reading.temperature)).size(13),
                text(format!("Wind: {:.1} m/s", reading.wind_speed)).size(13),
                text(format!("Humidity: {:.0}%", reading.humidity)).size(13),
                text(format!("Pressure: {:.0} hPa", reading.pressure)).size(13),
            ]
            .spacing(2);

            container(card)
                .padding(10)
                .style(theme::Container::Box)
                .into()
        })
        .collect();

    Row::with_children(cards).spacing(10).into()
}

/// Daily aggregates in city-then-day order
pub fn daily_summary_list(summaries: &[DailySummary]) -> Element<'_, Message> {
    let entries: Vec<Element<'_, Message>> = summaries
        .iter()
        .map(|summary| {
            let entry = column![
                text(format!("{} ({})", summary.city, summary.day)).size(15),
                text(format!("Mean temperature: {}", summary.formatted_mean())).size(13),
                text(format!("Dominant weather: {}", summary.dominant_description)).size(13),
            ]
            .spacing(2);

            container(entry)
                .padding(8)
                .width(Length::Fill)
                .style(theme::Container::Box)
                .into()
        })
        .collect();

    Column::with_children(entries)
        .spacing(6)
        .width(Length::Fill)
        .into()
}

/// Section heading
pub fn section_title(label: &str) -> Element<'_, Message> {
    text(label).size(18).into()
}
