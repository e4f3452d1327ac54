//! Screen layouts

use iced::widget::canvas::Canvas;
use iced::widget::{button, column, pick_list, row, scrollable, text, text_input, Space};
use iced::{Alignment, Element, Length};

use domain::Metric;

use crate::app::{ForecastQueryState, MapQueryState, Message};
use crate::charts::{BarChart, MapChart, TrendChart};
use crate::components;

/// Start menu with one button per query screen
pub fn start() -> Element<'static, Message> {
    let content = column![
        text("Weather IntelliMap").size(32),
        text("Compare current weather and 5-day forecasts across cities").size(16),
        Space::with_height(Length::Fixed(12.0)),
        row![
            button(text("Weather map")).padding(12).on_press(Message::OpenMapQuery),
            button(text("5-day forecast"))
                .padding(12)
                .on_press(Message::OpenForecastQuery),
        ]
        .spacing(16),
    ]
    .spacing(16)
    .align_items(Alignment::Center);

    iced::widget::container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
}

/// Current-weather screen: input row, notices, cards, map and bar charts
pub fn map_query(state: &MapQueryState) -> Element<'_, Message> {
    let input_row = row![
        button(text("Back")).on_press(Message::OpenStart),
        text_input("Berlin, London, Tokyo", &state.city_input)
            .on_input(Message::CityInputChanged)
            .on_submit(Message::RunQuery)
            .width(Length::Fill),
        pick_list(&Metric::ALL[..], Some(state.metric), Message::MetricSelected),
        query_button(state.loading),
    ]
    .spacing(8)
    .align_items(Alignment::Center);

    let mut content = column![input_row].spacing(12).padding(12);

    if !state.notices.is_empty() {
        content = content.push(components::notice_banners(&state.notices));
    }

    if state.loading {
        content = content.push(text("Fetching current weather...").size(14));
    }

    match &state.series {
        Some(series) if !series.is_empty() => {
            content = content
                .push(scrollable(components::reading_cards(&series.readings)).direction(
                    scrollable::Direction::Horizontal(scrollable::Properties::new()),
                ))
                .push(
                    row![
                        Canvas::new(MapChart::new(&series.readings))
                            .width(Length::FillPortion(3))
                            .height(Length::Fill),
                        Canvas::new(BarChart::new(series))
                            .width(Length::FillPortion(2))
                            .height(Length::Fill),
                    ]
                    .spacing(12)
                    .height(Length::Fill),
                );
        }
        Some(_) => {
            content = content.push(text("No data to show for this query.").size(14));
        }
        None if !state.loading => {
            content = content
                .push(text("Enter comma-separated city names and run the query.").size(14));
        }
        None => {}
    }

    content.into()
}

/// Forecast screen: input row, notices, trend chart, daily summaries
pub fn forecast_query(state: &ForecastQueryState) -> Element<'_, Message> {
    let input_row = row![
        button(text("Back")).on_press(Message::OpenStart),
        text_input("Berlin, London, Tokyo", &state.city_input)
            .on_input(Message::CityInputChanged)
            .on_submit(Message::RunQuery)
            .width(Length::Fill),
        query_button(state.loading),
    ]
    .spacing(8)
    .align_items(Alignment::Center);

    let mut content = column![input_row].spacing(12).padding(12);

    if !state.notices.is_empty() {
        content = content.push(components::notice_banners(&state.notices));
    }

    if state.loading {
        content = content.push(text("Fetching forecast...").size(14));
    }

    match &state.series {
        Some(series) if !series.is_empty() => {
            content = content
                .push(
                    Canvas::new(TrendChart::new(series))
                        .width(Length::Fill)
                        .height(Length::FillPortion(3)),
                )
                .push(components::section_title("Daily summaries"))
                .push(
                    scrollable(components::daily_summary_list(&series.summaries))
                        .height(Length::FillPortion(2)),
                );
        }
        Some(_) => {
            content = content.push(text("No data to show for this query.").size(14));
        }
        None if !state.loading => {
            content = content
                .push(text("Enter comma-separated city names and run the query.").size(14));
        }
        None => {}
    }

    content.into()
}

fn query_button(loading: bool) -> Element<'static, Message> {
    let mut query = button(text("Run query"));
    if !loading {
        query = query.on_press(Message::RunQuery);
    }
    query.into()
}
