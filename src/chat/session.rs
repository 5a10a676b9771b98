use reqwest::Client;
use thiserror::Error;

use super::transcript::{ChatMessage, Transcript};
use super::vocabulary::{classify, Vocabulary};
use crate::webhook::{FulfillmentResponse, WebhookRequest};

pub const MISSING_CITY_TEXT: &str = "Please specify a city name.";
pub const CONNECTION_TROUBLE_TEXT: &str =
    "Sorry, I'm having trouble connecting to the weather service.";

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Failed to reach webhook: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Webhook returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// One conversation with the webhook
pub struct ChatSession {
    client: Client,
    webhook_url: String,
    vocabulary: Vocabulary,
    transcript: Transcript,
}

impl ChatSession {
    pub fn new(client: Client, webhook_url: impl Into<String>, vocabulary: Vocabulary) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
            vocabulary,
            transcript: Transcript::default(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Handle one line of user input.
    ///
    /// Blank input is ignored. Every other input appends the user's message and
    /// exactly one bot message; failures become apology messages, never errors.
    pub async fn submit(&mut self, input: &str) {
        if input.trim().is_empty() {
            return;
        }

        self.transcript.push(ChatMessage::user(input));

        let Some(city) = self.vocabulary.extract_city(input) else {
            self.transcript.push(ChatMessage::bot(MISSING_CITY_TEXT));
            return;
        };
        let date = self.vocabulary.extract_date(input).unwrap_or_default();
        let intent = classify(input);

        tracing::debug!(city = %city, date = %date, intent = ?intent, "Sending chat request");

        let request = WebhookRequest::new(intent, city, date, input);

        let message = match self.send(&request).await {
            Ok(response) => ChatMessage::reply(response.fulfillment_text, response.weather_data),
            Err(e) => {
                tracing::warn!(error = %e, "Webhook request failed");
                ChatMessage::bot(CONNECTION_TROUBLE_TEXT)
            }
        };

        self.transcript.push(message);
    }

    async fn send(&self, request: &WebhookRequest) -> Result<FulfillmentResponse, ChatError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status(status));
        }

        Ok(response.json().await?)
    }
}
