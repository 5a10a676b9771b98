use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::models::*;

pub const OPENWEATHERMAP_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Units are fixed: every reply is rendered in °C and m/s
const UNITS: &str = "metric";

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Failed to fetch weather data: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Source of current conditions and forecast samples for a place
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for `place`
    async fn fetch_current(&self, place: &str) -> Result<CurrentConditions, WeatherError>;

    /// Raw forecast samples for `place`, in the order the provider returned them
    async fn fetch_forecast_series(&self, place: &str)
        -> Result<Vec<ForecastSample>, WeatherError>;
}

/// OpenWeatherMap 2.5 client (`/weather` and `/forecast`)
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    /// `base_url` is normally `OPENWEATHERMAP_BASE_URL`; tests point it at a mock server
    pub fn new(client: Client, api_key: &str, base_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `{base_url}/{endpoint}` for a place and return the success response
    async fn get(&self, endpoint: &str, place: &str) -> Result<reqwest::Response, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        // Use query builder for proper URL encoding - handles spaces and special chars
        let response = self
            .client
            .get(&url)
            .query(&[("q", place), ("appid", self.api_key.as_str()), ("units", UNITS)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(endpoint = %endpoint, status = %status, "Received API response");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound(place.to_string()));
        }

        if !status.is_success() {
            let error: OpenWeatherMapError = response.json().await.unwrap_or(OpenWeatherMapError {
                message: format!("HTTP {}", status),
            });
            return Err(WeatherError::ApiError(error.message));
        }

        Ok(response)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_current(&self, place: &str) -> Result<CurrentConditions, WeatherError> {
        tracing::debug!(city = %place, "Fetching current weather");

        let data: OpenWeatherMapCurrent = self.get("weather", place).await?.json().await?;
        let current = current_from_response(place, data)?;

        tracing::info!(city = %place, temp = %current.temperature_c, "Weather data fetched successfully");

        Ok(current)
    }

    async fn fetch_forecast_series(
        &self,
        place: &str,
    ) -> Result<Vec<ForecastSample>, WeatherError> {
        tracing::debug!(city = %place, "Fetching forecast series");

        let data: OpenWeatherMapForecast = self.get("forecast", place).await?.json().await?;
        let samples = samples_from_response(data)?;

        tracing::info!(city = %place, samples = samples.len(), "Forecast series fetched successfully");

        Ok(samples)
    }
}

/// The reply names the place the way the user asked for it, not the provider's spelling
fn current_from_response(
    place: &str,
    data: OpenWeatherMapCurrent,
) -> Result<CurrentConditions, WeatherError> {
    let weather_info = data.weather.into_iter().next().ok_or_else(|| {
        WeatherError::InvalidResponse("No weather information available".to_string())
    })?;

    Ok(CurrentConditions {
        place: place.to_string(),
        temperature_c: data.main.temp,
        high_c: data.main.temp_max,
        low_c: data.main.temp_min,
        humidity_pct: data.main.humidity,
        wind_speed: data.wind.speed,
        condition: weather_info.main,
        description: weather_info.description,
    })
}

fn samples_from_response(data: OpenWeatherMapForecast) -> Result<Vec<ForecastSample>, WeatherError> {
    data.list
        .into_iter()
        .map(|entry| {
            let weather = entry.weather.into_iter().next().ok_or_else(|| {
                WeatherError::InvalidResponse(format!(
                    "Forecast entry {} has no weather information",
                    entry.dt
                ))
            })?;

            Ok(ForecastSample {
                timestamp: entry.dt,
                temperature_c: entry.main.temp,
                temp_max_c: entry.main.temp_max,
                temp_min_c: entry.main.temp_min,
                condition: weather.main,
                description: weather.description,
            })
        })
        .collect()
}
