use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::reply::{format_day_label, icon_for, round_half_up, WeatherData};

/// `<index>. <day>: <icon glyphs> <description>`
static FORECAST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.\s*([^:]+):\s*([\x{2600}-\x{27BF}\x{1F300}-\x{1FAFF}\x{FE0F}]*)\s*(.*)$")
        .expect("forecast line pattern is valid")
});

#[derive(Debug, Clone, PartialEq)]
pub struct DayTemperatures {
    pub avg: i64,
    pub high: i64,
    pub low: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub index: u32,
    pub day: String,
    pub icon: String,
    pub description: String,
    /// Only known when the card is built from structured data
    pub temperatures: Option<DayTemperatures>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardLine {
    Day(ForecastDay),
    /// Line that did not match the day pattern, shown as-is
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherCard {
    Forecast { header: String, lines: Vec<CardLine> },
    /// Anything without a per-day layout, shown line by line
    Plain(String),
}

impl WeatherCard {
    /// Prefer the structured forecast, fall back to re-reading the text
    pub fn new(text: &str, data: Option<&WeatherData>) -> Self {
        data.and_then(Self::from_data)
            .unwrap_or_else(|| Self::from_text(text))
    }

    /// Rebuild a card from the reply text. Never fails: anything that does not
    /// parse ends up as raw text.
    pub fn from_text(text: &str) -> Self {
        if !text.to_lowercase().contains("forecast") {
            return WeatherCard::Plain(text.to_string());
        }

        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let Some(header) = lines.next() else {
            return WeatherCard::Plain(text.to_string());
        };

        let lines: Vec<CardLine> = lines.map(parse_line).collect();
        if lines.is_empty() {
            return WeatherCard::Plain(text.to_string());
        }

        WeatherCard::Forecast {
            header: header.to_string(),
            lines,
        }
    }

    /// Card for a structured forecast. Current conditions have no per-field
    /// card, so they return `None` and render from the full reply text.
    pub fn from_data(data: &WeatherData) -> Option<Self> {
        let days = data.forecast.as_ref().filter(|days| !days.is_empty())?;
        let lines = days
            .iter()
            .zip(1..)
            .map(|(day, index)| {
                CardLine::Day(ForecastDay {
                    index,
                    day: format_day_label(day.date),
                    icon: icon_for(&day.condition).to_string(),
                    description: day.description.clone(),
                    temperatures: Some(DayTemperatures {
                        avg: round_half_up(day.avg_temp_c),
                        high: round_half_up(day.max_temp_c),
                        low: round_half_up(day.min_temp_c),
                    }),
                })
            })
            .collect();

        Some(WeatherCard::Forecast {
            header: format!("8-day forecast for {}:", data.city),
            lines,
        })
    }
}

fn parse_line(line: &str) -> CardLine {
    let Some(caps) = FORECAST_LINE.captures(line) else {
        return CardLine::Raw(line.to_string());
    };

    let Ok(index) = caps[1].parse::<u32>() else {
        return CardLine::Raw(line.to_string());
    };

    CardLine::Day(ForecastDay {
        index,
        day: caps[2].trim().to_string(),
        icon: caps[3].to_string(),
        description: caps[4].trim().to_string(),
        temperatures: None,
    })
}

impl fmt::Display for WeatherCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherCard::Plain(text) => {
                let mut lines = text.lines().filter(|line| !line.trim().is_empty());
                if let Some(first) = lines.next() {
                    write!(f, "┃ {}", first)?;
                }
                for line in lines {
                    write!(f, "\n┃ {}", line)?;
                }
                Ok(())
            }
            WeatherCard::Forecast { header, lines } => {
                write!(f, "┃ {}", header)?;
                for line in lines {
                    match line {
                        CardLine::Day(day) => {
                            write!(f, "\n┃ {} {:<12} {}", day.icon, day.day, day.description)?;
                            if let Some(t) = &day.temperatures {
                                write!(f, "  {}°C ({}°C / {}°C)", t.avg, t.low, t.high)?;
                            }
                        }
                        CardLine::Raw(raw) => write!(f, "\n┃ {}", raw.trim())?,
                    }
                }
                Ok(())
            }
        }
    }
}
