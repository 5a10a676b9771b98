mod format;
pub mod icons;

pub use format::{
    format_current, format_day_label, format_forecast, format_not_found, round_half_up,
    CurrentSnapshot, FormattedReply, ReplyKind, WeatherData,
};
pub use icons::{icon_for, DEFAULT_ICON};
