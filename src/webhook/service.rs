use std::sync::Arc;

use axum::http::StatusCode;
use thiserror::Error;

use super::models::{FulfillmentResponse, Intent, WebhookRequest};
use crate::error::HttpError;
use crate::forecast::aggregate_daily;
use crate::impl_into_response;
use crate::reply::{format_current, format_forecast, format_not_found, ReplyKind};
use crate::weather::{WeatherError, WeatherProvider};

pub const SERVICE_FAILURE_TEXT: &str =
    "Sorry, there was an error processing your request. Please try again later.";

pub const UNRECOGNIZED_INTENT_TEXT: &str =
    "I'm not sure how to handle that request. Please ask about current weather or forecasts.";

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Invalid request: missing queryResult")]
    MissingQueryResult,

    #[error("Invalid request: missing geo-city parameter")]
    MissingCity,

    #[error("Weather provider failed: {0}")]
    Provider(#[from] WeatherError),
}

impl HttpError for WebhookError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingQueryResult | Self::MissingCity => StatusCode::BAD_REQUEST,
            Self::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn fulfillment_text(&self) -> String {
        match self {
            Self::MissingQueryResult => "Invalid request: Missing queryResult".to_string(),
            Self::MissingCity => "Please provide a city name.".to_string(),
            Self::Provider(_) => SERVICE_FAILURE_TEXT.to_string(),
        }
    }
}

impl_into_response!(WebhookError);

/// Maps a webhook call onto one weather flow
pub struct WebhookService {
    provider: Arc<dyn WeatherProvider>,
}

impl WebhookService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, request: WebhookRequest) -> Result<FulfillmentResponse, WebhookError> {
        let query = request
            .query_result
            .ok_or(WebhookError::MissingQueryResult)?;

        let intent_name = query.intent.and_then(|i| i.display_name);
        let parameters = query.parameters.unwrap_or_default();
        let city = parameters
            .geo_city
            .filter(|city| !city.trim().is_empty())
            .ok_or(WebhookError::MissingCity)?;

        let intent = Intent::from_display_name(intent_name.as_deref());

        tracing::info!(
            intent = ?intent,
            intent_name = ?intent_name,
            city = %city,
            date = ?parameters.date,
            "Handling webhook request"
        );

        match intent {
            Intent::CurrentWeather => self.current_weather(&city).await,
            Intent::Forecast => self.forecast(&city).await,
            Intent::Unrecognized => Ok(FulfillmentResponse::text(UNRECOGNIZED_INTENT_TEXT)),
        }
    }

    async fn current_weather(&self, city: &str) -> Result<FulfillmentResponse, WebhookError> {
        match self.provider.fetch_current(city).await {
            Ok(current) => Ok(format_current(&current).into()),
            Err(WeatherError::CityNotFound(place)) => {
                tracing::info!(city = %place, "City not found for current weather");
                Ok(format_not_found(&place, ReplyKind::Weather).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn forecast(&self, city: &str) -> Result<FulfillmentResponse, WebhookError> {
        match self.provider.fetch_forecast_series(city).await {
            Ok(samples) => {
                let days = aggregate_daily(&samples);
                tracing::debug!(city = %city, samples = samples.len(), days = days.len(), "Aggregated forecast");
                Ok(format_forecast(city, &days).into())
            }
            Err(WeatherError::CityNotFound(place)) => {
                tracing::info!(city = %place, "City not found for forecast");
                Ok(format_not_found(&place, ReplyKind::Forecast).into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
