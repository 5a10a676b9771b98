use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::icons::icon_for;
use crate::forecast::DailyForecastSummary;
use crate::weather::CurrentConditions;

/// Which lookup failed, for the not-found apology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Weather,
    Forecast,
}

impl fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyKind::Weather => f.write_str("weather"),
            ReplyKind::Forecast => f.write_str("forecast"),
        }
    }
}

/// Display text plus the structured data it was rendered from
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedReply {
    pub text: String,
    pub weather_data: Option<WeatherData>,
}

impl FormattedReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weather_data: None,
        }
    }
}

/// Structured payload sent next to the fulfillment text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherData {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Vec<DailyForecastSummary>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CurrentSnapshot {
    /// Rounded temperature in °C
    pub temp: i64,
    pub condition: String,
    pub description: String,
    pub icon: String,
}

/// Round to the nearest whole degree, halves going up (-2.5 becomes -2)
pub fn round_half_up(value: f64) -> i64 {
    // `value + 0.5` would round up values just below a half
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Short en-US label such as "Mon, Jan 15"
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

pub fn format_current(current: &CurrentConditions) -> FormattedReply {
    let icon = icon_for(&current.condition);

    let text = format!(
        "Current weather in {}:\n\
         {} {}\n\
         🌡️ Temperature: {}°C\n\
         🔺 High: {}°C | 🔻 Low: {}°C\n\
         💧 Humidity: {}%\n\
         🌬️ Wind: {} m/s",
        current.place,
        icon,
        current.description,
        round_half_up(current.temperature_c),
        round_half_up(current.high_c),
        round_half_up(current.low_c),
        current.humidity_pct,
        current.wind_speed,
    );

    FormattedReply {
        text,
        weather_data: Some(WeatherData {
            city: current.place.clone(),
            current: Some(CurrentSnapshot {
                temp: round_half_up(current.temperature_c),
                condition: current.condition.clone(),
                description: current.description.clone(),
                icon: icon.to_string(),
            }),
            forecast: None,
        }),
    }
}

pub fn format_forecast(place: &str, days: &[DailyForecastSummary]) -> FormattedReply {
    let mut text = format!("8-day forecast for {}:\n", place);

    for (index, day) in days.iter().enumerate() {
        text.push_str(&format!(
            "{}. {}: {} {}\n   🌡️ {}°C (High: {}°C, Low: {}°C)\n\n",
            index + 1,
            format_day_label(day.date),
            icon_for(&day.condition),
            day.description,
            round_half_up(day.avg_temp_c),
            round_half_up(day.max_temp_c),
            round_half_up(day.min_temp_c),
        ));
    }

    FormattedReply {
        text,
        weather_data: Some(WeatherData {
            city: place.to_string(),
            current: None,
            forecast: Some(days.to_vec()),
        }),
    }
}

pub fn format_not_found(place: &str, kind: ReplyKind) -> FormattedReply {
    FormattedReply::text(format!(
        "Sorry, I couldn't find {} data for {}. Please check the city name and try again.",
        kind, place
    ))
}
