use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::reply::{FormattedReply, WeatherData};

// ============================================================================
// Request (Dialogflow-style fulfillment envelope)
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_result: Option<QueryResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// The user's literal input, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<IntentInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<QueryParameters>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntentInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QueryParameters {
    #[serde(rename = "geo-city", default, skip_serializing_if = "Option::is_none")]
    pub geo_city: Option<String>,
    /// Date hint such as "tomorrow"; accepted but does not change the reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl WebhookRequest {
    /// Build the envelope the chat client sends
    pub fn new(intent: Intent, city: &str, date: &str, query_text: &str) -> Self {
        Self {
            query_result: Some(QueryResult {
                query_text: Some(query_text.to_string()),
                intent: Some(IntentInfo {
                    display_name: intent.display_name().map(str::to_string),
                }),
                parameters: Some(QueryParameters {
                    geo_city: Some(city.to_string()),
                    date: Some(date.to_string()),
                }),
            }),
        }
    }
}

// ============================================================================
// Intent
// ============================================================================

/// Conversational action requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    CurrentWeather,
    Forecast,
    Unrecognized,
}

impl Intent {
    pub const CURRENT_WEATHER_NAME: &'static str = "CurrentWeatherIntent";
    pub const FORECAST_NAME: &'static str = "8DayForecastIntent";

    pub fn from_display_name(name: Option<&str>) -> Self {
        match name {
            Some(Self::CURRENT_WEATHER_NAME) => Intent::CurrentWeather,
            Some(Self::FORECAST_NAME) => Intent::Forecast,
            _ => Intent::Unrecognized,
        }
    }

    pub fn display_name(self) -> Option<&'static str> {
        match self {
            Intent::CurrentWeather => Some(Self::CURRENT_WEATHER_NAME),
            Intent::Forecast => Some(Self::FORECAST_NAME),
            Intent::Unrecognized => None,
        }
    }
}

// ============================================================================
// Response
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentResponse {
    pub fulfillment_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_data: Option<WeatherData>,
}

impl FulfillmentResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            fulfillment_text: text.into(),
            weather_data: None,
        }
    }
}

impl From<FormattedReply> for FulfillmentResponse {
    fn from(reply: FormattedReply) -> Self {
        Self {
            fulfillment_text: reply.text,
            weather_data: reply.weather_data,
        }
    }
}
