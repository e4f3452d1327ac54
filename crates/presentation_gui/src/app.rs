//! Application state machine
//!
//! Three screens: a start menu, the current-weather map query, and the
//! 5-day forecast query. Fetches run in the background through
//! [`Command::perform`]; every query carries a generation id so results
//! arriving for an abandoned or re-run query are discarded instead of
//! clobbering newer state.

use std::sync::Arc;

use application::{CurrentSeries, ForecastSeries, SeriesBuilder};
use domain::{CityName, Metric};
use iced::{executor, Command, Element, Theme};
use tracing::debug;

use crate::view;

/// Dependencies handed to the application at startup
#[derive(Debug)]
pub struct AppFlags {
    /// Shared series pipeline over the configured weather client
    pub series_builder: Arc<SeriesBuilder>,
}

/// Top-level UI events
#[derive(Debug, Clone)]
pub enum Message {
    /// Navigate back to the start menu
    OpenStart,
    /// Open the current-weather map screen
    OpenMapQuery,
    /// Open the 5-day forecast screen
    OpenForecastQuery,
    /// The comma-separated city input changed
    CityInputChanged(String),
    /// A different comparison metric was picked
    MetricSelected(Metric),
    /// Run the active screen's query
    RunQuery,
    /// A current-weather query finished
    CurrentLoaded {
        query_id: u64,
        series: CurrentSeries,
    },
    /// A forecast query finished
    ForecastLoaded {
        query_id: u64,
        series: ForecastSeries,
    },
    /// Dismiss the notice at the given index
    DismissNotice(usize),
}

/// State of the current-weather map screen
#[derive(Debug)]
pub struct MapQueryState {
    pub city_input: String,
    pub metric: Metric,
    pub query_id: u64,
    pub loading: bool,
    pub series: Option<CurrentSeries>,
    pub notices: Vec<application::QueryNotice>,
}

impl Default for MapQueryState {
    fn default() -> Self {
        Self {
            city_input: String::new(),
            metric: Metric::Temperature,
            query_id: 0,
            loading: false,
            series: None,
            notices: Vec::new(),
        }
    }
}

/// State of the forecast screen
#[derive(Debug, Default)]
pub struct ForecastQueryState {
    pub city_input: String,
    pub query_id: u64,
    pub loading: bool,
    pub series: Option<ForecastSeries>,
    pub notices: Vec<application::QueryNotice>,
}

/// Which screen is shown
#[derive(Debug)]
pub enum Screen {
    Start,
    MapQuery(MapQueryState),
    ForecastQuery(ForecastQueryState),
}

/// The iced application
#[derive(Debug)]
pub struct WeatherApp {
    series_builder: Arc<SeriesBuilder>,
    screen: Screen,
    next_query_id: u64,
}

impl iced::Application for WeatherApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        (
            Self {
                series_builder: flags.series_builder,
                screen: Screen::Start,
                next_query_id: 0,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        "Weather IntelliMap".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::OpenStart => {
                self.screen = Screen::Start;
                Command::none()
            }
            Message::OpenMapQuery => {
                self.screen = Screen::MapQuery(MapQueryState::default());
                Command::none()
            }
            Message::OpenForecastQuery => {
                self.screen = Screen::ForecastQuery(ForecastQueryState::default());
                Command::none()
            }
            Message::CityInputChanged(input) => {
                match &mut self.screen {
                    Screen::MapQuery(state) => state.city_input = input,
                    Screen::ForecastQuery(state) => state.city_input = input,
                    Screen::Start => {}
                }
                Command::none()
            }
            Message::MetricSelected(metric) => {
                if let Screen::MapQuery(state) = &mut self.screen {
                    state.metric = metric;
                }
                Command::none()
            }
            Message::RunQuery => self.run_query(),
            Message::CurrentLoaded { query_id, series } => {
                if let Screen::MapQuery(state) = &mut self.screen {
                    if state.query_id == query_id {
                        state.loading = false;
                        state.notices = series.notices.clone();
                        state.series = Some(series);
                    } else {
                        debug!(query_id, "Discarding stale current-weather result");
                    }
                }
                Command::none()
            }
            Message::ForecastLoaded { query_id, series } => {
                if let Screen::ForecastQuery(state) = &mut self.screen {
                    if state.query_id == query_id {
                        state.loading = false;
                        state.notices = series.notices.clone();
                        state.series = Some(series);
                    } else {
                        debug!(query_id, "Discarding stale forecast result");
                    }
                }
                Command::none()
            }
            Message::DismissNotice(index) => {
                let notices = match &mut self.screen {
                    Screen::MapQuery(state) => Some(&mut state.notices),
                    Screen::ForecastQuery(state) => Some(&mut state.notices),
                    Screen::Start => None,
                };
                if let Some(notices) = notices {
                    if index < notices.len() {
                        notices.remove(index);
                    }
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Start => view::start(),
            Screen::MapQuery(state) => view::map_query(state),
            Screen::ForecastQuery(state) => view::forecast_query(state),
        }
    }
}

impl WeatherApp {
    fn run_query(&mut self) -> Command<Message> {
        match &mut self.screen {
            Screen::MapQuery(state) => {
                let cities = CityName::parse_list(&state.city_input);
                if cities.is_empty() {
                    return Command::none();
                }
                self.next_query_id += 1;
                let query_id = self.next_query_id;
                state.query_id = query_id;
                state.loading = true;
                state.series = None;
                state.notices.clear();

                let metric = state.metric;
                let builder = Arc::clone(&self.series_builder);
                Command::perform(
                    async move { builder.build_current(&cities, metric).await },
                    move |series| Message::CurrentLoaded { query_id, series },
                )
            }
            Screen::ForecastQuery(state) => {
                let cities = CityName::parse_list(&state.city_input);
                if cities.is_empty() {
                    return Command::none();
                }
                self.next_query_id += 1;
                let query_id = self.next_query_id;
                state.query_id = query_id;
                state.loading = true;
                state.series = None;
                state.notices.clear();

                let builder = Arc::clone(&self.series_builder);
                Command::perform(
                    async move { builder.build_forecast(&cities).await },
                    move |series| Message::ForecastLoaded { query_id, series },
                )
            }
            Screen::Start => Command::none(),
        }
    }
}
