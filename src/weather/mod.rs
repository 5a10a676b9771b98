pub mod models;
mod service;

pub use models::{CurrentConditions, ForecastSample};
pub use service::{OpenWeatherClient, WeatherError, WeatherProvider, OPENWEATHERMAP_BASE_URL};
