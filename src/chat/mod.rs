pub mod card;
mod session;
pub mod transcript;
mod vocabulary;

pub use card::{CardLine, ForecastDay, WeatherCard};
pub use session::{ChatError, ChatSession, CONNECTION_TROUBLE_TEXT, MISSING_CITY_TEXT};
pub use transcript::{ChatMessage, Sender, Transcript, GREETING};
pub use vocabulary::{classify, Vocabulary};

/// Terminal rendering of one transcript entry
pub fn render_message(message: &ChatMessage) -> String {
    match message.sender {
        Sender::User => format!("you> {}", message.text),
        Sender::Bot if message.is_weather => {
            WeatherCard::new(&message.text, message.weather_data.as_ref()).to_string()
        }
        Sender::Bot => format!("bot> {}", message.text),
    }
}
