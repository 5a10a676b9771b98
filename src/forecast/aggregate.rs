use chrono::{DateTime, NaiveDate};
use indexmap::IndexMap;

use super::models::DailyForecastSummary;
use crate::weather::ForecastSample;

/// Number of days kept after grouping
pub const MAX_FORECAST_DAYS: usize = 8;

/// Running totals for one calendar day
struct DayAccumulator {
    temp_sum: f64,
    count: usize,
    max_temp: f64,
    min_temp: f64,
    condition: String,
    description: String,
}

impl DayAccumulator {
    fn new(sample: &ForecastSample) -> Self {
        Self {
            temp_sum: sample.temperature_c,
            count: 1,
            max_temp: sample.temp_max_c,
            min_temp: sample.temp_min_c,
            condition: sample.condition.clone(),
            description: sample.description.clone(),
        }
    }

    /// Representative condition stays with the first sample; only the stats move
    fn add(&mut self, sample: &ForecastSample) {
        self.temp_sum += sample.temperature_c;
        self.count += 1;
        self.max_temp = self.max_temp.max(sample.temp_max_c);
        self.min_temp = self.min_temp.min(sample.temp_min_c);
    }

    fn into_summary(self, date: NaiveDate) -> DailyForecastSummary {
        DailyForecastSummary {
            date,
            avg_temp_c: self.temp_sum / self.count as f64,
            max_temp_c: self.max_temp,
            min_temp_c: self.min_temp,
            condition: self.condition,
            description: self.description,
        }
    }
}

/// Group forecast samples by UTC calendar day and summarize each day.
///
/// Days come back ascending by date, at most [`MAX_FORECAST_DAYS`] of them.
/// Missing days are not filled in.
pub fn aggregate_daily(samples: &[ForecastSample]) -> Vec<DailyForecastSummary> {
    let mut days: IndexMap<NaiveDate, DayAccumulator> = IndexMap::new();

    for sample in samples {
        let Some(date) = sample_date(sample.timestamp) else {
            tracing::warn!(timestamp = sample.timestamp, "Skipping forecast sample with invalid timestamp");
            continue;
        };

        days.entry(date)
            .and_modify(|day| day.add(sample))
            .or_insert_with(|| DayAccumulator::new(sample));
    }

    days.sort_keys();

    days.into_iter()
        .take(MAX_FORECAST_DAYS)
        .map(|(date, day)| day.into_summary(date))
        .collect()
}

fn sample_date(timestamp: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.date_naive())
}
