use config::{Case, Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::weather::OPENWEATHERMAP_BASE_URL;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port (WEATHERBOT_PORT, or a bare PORT variable)
    #[serde(default = "default_port")]
    pub port: u16,

    /// OpenWeatherMap API key. Required by the server, unused by the chat client.
    #[serde(default)]
    pub openweathermap_api_key: Option<String>,

    /// Base URL of the OpenWeatherMap 2.5 API
    #[serde(default = "default_provider_base_url")]
    pub provider_base_url: String,

    /// Browser origin allowed to call the webhook
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    /// Whole-request timeout for the webhook
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Webhook endpoint the chat client posts to
    #[serde(default = "default_webhook_url")]
    pub webhook_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_provider_base_url() -> String {
    OPENWEATHERMAP_BASE_URL.to_string()
}

fn default_cors_origin() -> String {
    "http://localhost:3001".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_webhook_url() -> String {
    "http://localhost:3000/webhook".to_string()
}

/// A bare PORT variable sets the default so WEATHERBOT_PORT still wins
fn port_from_env() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port)
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Start with default values
            .set_default("host", default_host())?
            .set_default("port", port_from_env())?
            .set_default("provider_base_url", default_provider_base_url())?
            .set_default("cors_origin", default_cors_origin())?
            .set_default("webhook_url", default_webhook_url())?
            // Load from config file if present
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config.local").required(false))
            // Override with environment variables (prefixed with WEATHERBOT_)
            // Convert SCREAMING_SNAKE_CASE env vars to snake_case config keys
            .add_source(
                Environment::with_prefix("WEATHERBOT")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// The provider API key, or an error naming the variable to set
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.openweathermap_api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ConfigError::NotFound(
                    "openweathermap_api_key (set WEATHERBOT_OPENWEATHERMAP_API_KEY)".to_string(),
                )
            })
    }
}
