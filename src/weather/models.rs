use serde::{Deserialize, Serialize};

// ============================================================================
// OpenWeatherMap 2.5 Responses (Internal)
// These structs deserialize the raw API response; not all fields are used
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct OpenWeatherMapCurrent {
    pub weather: Vec<WeatherCondition>,
    pub main: MainInfo,
    pub wind: WindInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenWeatherMapForecast {
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastEntry {
    pub dt: i64,
    pub main: MainInfo,
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainInfo {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    #[serde(default)]
    pub humidity: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct WeatherCondition {
    pub main: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WindInfo {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenWeatherMapError {
    pub message: String,
}

// ============================================================================
// Domain Models (what the rest of the crate works with)
// ============================================================================

/// Current conditions for a place, in metric units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub place: String,
    pub temperature_c: f64,
    pub high_c: f64,
    pub low_c: f64,
    pub humidity_pct: u32,
    /// Wind speed in m/s, as reported by the provider
    pub wind_speed: f64,
    /// Provider category such as "Clear", "Clouds" or "Rain"
    pub condition: String,
    pub description: String,
}

/// One point of the provider's 3-hourly forecast feed
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    /// Unix timestamp (seconds, UTC)
    pub timestamp: i64,
    pub temperature_c: f64,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
    pub condition: String,
    pub description: String,
}
