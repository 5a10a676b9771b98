use crate::reply::WeatherData;

pub const GREETING: &str =
    "Hello! I'm your weather assistant. Ask me about current weather or forecasts.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    /// Reply looks like weather output and should render as a card
    pub is_weather: bool,
    pub weather_data: Option<WeatherData>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            is_weather: false,
            weather_data: None,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            is_weather: false,
            weather_data: None,
        }
    }

    /// Bot reply from the webhook, flagged when the text carries a degree sign or "forecast"
    pub fn reply(text: impl Into<String>, weather_data: Option<WeatherData>) -> Self {
        let text = text.into();
        let is_weather = looks_like_weather(&text);
        Self {
            text,
            sender: Sender::Bot,
            is_weather,
            weather_data,
        }
    }
}

pub fn looks_like_weather(text: &str) -> bool {
    text.contains('°') || text.contains("forecast")
}

/// Append-only conversation log
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING)],
        }
    }
}

impl Transcript {
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Messages appended at or after `index`
    pub fn since(&self, index: usize) -> &[ChatMessage] {
        self.messages.get(index..).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
