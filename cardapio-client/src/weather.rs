//! Weather provider
//!
//! Resolves a city through the coordinate table and asks Open-Meteo for the
//! current reading. No caching, no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::WeatherInfo;

use crate::{ClientConfig, WeatherError, WeatherLocations};

/// Weather provider trait
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, city: &str) -> Result<WeatherInfo, WeatherError>;
}

#[derive(Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    time: String,
}

/// Open-Meteo forecast client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
    locations: WeatherLocations,
}

impl OpenMeteoClient {
    pub fn new(config: &ClientConfig) -> Result<Self, WeatherError> {
        Ok(Self {
            client: config.http_client()?,
            base_url: config.weather_base_url.trim_end_matches('/').to_string(),
            locations: config.weather_locations.clone(),
        })
    }

    /// Coordinate table in use
    pub fn locations(&self) -> &WeatherLocations {
        &self.locations
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherInfo, WeatherError> {
        let coords = self
            .locations
            .get(city)
            .ok_or_else(|| WeatherError::UnsupportedLocation(city.to_string()))?;

        let url = format!("{}/v1/forecast", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("timezone", "auto".to_string()),
                ("windspeed_unit", "kmh".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(city, status = status.as_u16(), "Forecast request failed");
            return Err(WeatherError::Request {
                status: status.as_u16(),
            });
        }

        let forecast: ForecastResponse = response
            .json()
            .await
            .map_err(|_| WeatherError::MalformedResponse)?;
        let current = forecast
            .current_weather
            .ok_or(WeatherError::MalformedResponse)?;

        tracing::debug!(city, temperature = current.temperature, "Weather loaded");
        Ok(WeatherInfo {
            temperature: current.temperature,
            windspeed: current.windspeed,
            time: current.time,
        })
    }
}
