//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::{CurrentConditions, ForecastSample, WeatherPort};
use async_trait::async_trait;
use domain::value_objects::{CityName, GeoLocation};
use integration_weather::{
    CurrentResponse, ForecastResponse, OpenWeatherClient, WeatherApi, WeatherConfig, WeatherError,
};
use tracing::instrument;

/// Adapter for weather services using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter from weather configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenWeatherClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        ApplicationError::ExternalService(err.to_string())
    }

    /// Convert a decoded `/weather` payload to port conditions
    fn map_current(payload: CurrentResponse) -> Result<CurrentConditions, ApplicationError> {
        let location = GeoLocation::new(payload.coord.lat, payload.coord.lon).map_err(|e| {
            ApplicationError::ExternalService(format!("Malformed payload: {e}"))
        })?;
        let description = payload
            .description()
            .ok_or_else(|| {
                ApplicationError::ExternalService(
                    "Malformed payload: no weather description".to_string(),
                )
            })?
            .to_string();

        Ok(CurrentConditions {
            city: payload.name,
            location,
            temperature: payload.main.temp,
            wind_speed: payload.wind.speed,
            humidity: payload.main.humidity,
            pressure: payload.main.pressure,
            description,
        })
    }

    /// Convert a decoded `/forecast` payload to port samples
    fn map_forecast(payload: ForecastResponse) -> Result<Vec<ForecastSample>, ApplicationError> {
        payload
            .list
            .into_iter()
            .map(|entry| {
                let description = entry
                    .description()
                    .ok_or_else(|| {
                        ApplicationError::ExternalService(
                            "Malformed payload: no weather description".to_string(),
                        )
                    })?
                    .to_string();
                Ok(ForecastSample {
                    dt_txt: entry.dt_txt,
                    temperature: entry.main.temp,
                    description,
                })
            })
            .collect()
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn current_conditions(
        &self,
        city: &CityName,
    ) -> Result<CurrentConditions, ApplicationError> {
        let payload = self
            .client
            .fetch_current(city.as_str())
            .await
            .map_err(Self::map_error)?;
        Self::map_current(payload)
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn forecast(&self, city: &CityName) -> Result<Vec<ForecastSample>, ApplicationError> {
        let payload = self
            .client
            .fetch_forecast(city.as_str())
            .await
            .map_err(Self::map_error)?;
        Self::map_forecast(payload)
    }
}
