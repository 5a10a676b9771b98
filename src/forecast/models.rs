use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregated forecast for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecastSummary {
    /// UTC date of the samples in this group
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    /// Plain mean of the day's sample temperatures (not time-weighted)
    pub avg_temp_c: f64,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    /// Category of the first sample seen for the day
    pub condition: String,
    /// Description of the first sample seen for the day
    pub description: String,
}
