use crate::webhook::Intent;

const DEFAULT_CITIES: &[&str] = &[
    "London",
    "Paris",
    "New York",
    "Tokyo",
    "Islamabad",
    "Lahore",
    "Karachi",
    "Beijing",
    "Delhi",
    "Berlin",
    "Sydney",
    "Toronto",
    "Moscow",
    "Dubai",
    "Rome",
    "Madrid",
    "Istanbul",
    "Cairo",
    "Bangkok",
    "Singapore",
];

const DEFAULT_DATE_KEYWORDS: &[&str] = &[
    "today",
    "tomorrow",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Fixed keyword tables used to pull a city and a date hint out of free text.
///
/// Lookup order is table order: the first entry found in the input wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    cities: Vec<String>,
    date_keywords: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_CITIES, DEFAULT_DATE_KEYWORDS)
    }
}

impl Vocabulary {
    pub fn new<S: AsRef<str>>(cities: &[S], date_keywords: &[S]) -> Self {
        Self {
            cities: cities.iter().map(|c| c.as_ref().to_string()).collect(),
            date_keywords: date_keywords.iter().map(|d| d.as_ref().to_string()).collect(),
        }
    }

    /// First known city contained in `text`, ignoring case
    pub fn extract_city(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.cities
            .iter()
            .find(|city| lower.contains(&city.to_lowercase()))
            .map(String::as_str)
    }

    /// First date keyword contained in `text`, case-sensitive
    pub fn extract_date(&self, text: &str) -> Option<&str> {
        self.date_keywords
            .iter()
            .find(|keyword| text.contains(keyword.as_str()))
            .map(String::as_str)
    }
}

/// Forecast when the input mentions "forecast", current weather otherwise
pub fn classify(text: &str) -> Intent {
    if text.to_lowercase().contains("forecast") {
        Intent::Forecast
    } else {
        Intent::CurrentWeather
    }
}
