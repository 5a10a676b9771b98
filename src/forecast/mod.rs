mod aggregate;
pub mod models;

pub use aggregate::{aggregate_daily, MAX_FORECAST_DAYS};
pub use models::DailyForecastSummary;
