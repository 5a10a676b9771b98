/// Glyph used for any category missing from [`WEATHER_ICONS`]
pub const DEFAULT_ICON: &str = "🌫️";

/// Provider condition category to display glyph
pub const WEATHER_ICONS: &[(&str, &str)] = &[
    ("Clear", "☀️"),
    ("Clouds", "☁️"),
    ("Rain", "🌧️"),
    ("Thunderstorm", "⛈️"),
    ("Drizzle", "🌦️"),
    ("Snow", "❄️"),
    ("Mist", "🌫️"),
    ("Fog", "🌁"),
];

pub fn icon_for(condition: &str) -> &'static str {
    WEATHER_ICONS
        .iter()
        .find(|(category, _)| *category == condition)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
