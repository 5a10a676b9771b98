pub mod chat;
pub mod config;
pub mod error;
pub mod forecast;
pub mod openapi;
pub mod reply;
pub mod routes;
pub mod weather;
pub mod webhook;

use std::{sync::Arc, time::Duration};

use reqwest::Client;

use crate::config::AppConfig;
use crate::webhook::WebhookService;

/// Shared HTTP client configuration
const HTTP_TIMEOUT_SECS: u64 = 30;
const HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;
const HTTP_POOL_IDLE_TIMEOUT_SECS: u64 = 90;

#[derive(Clone)]
pub struct AppState {
    pub webhook_service: Arc<WebhookService>,
    pub config: Arc<AppConfig>,
}

/// Create shared HTTP client with connection pooling
pub fn create_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .pool_idle_timeout(Duration::from_secs(HTTP_POOL_IDLE_TIMEOUT_SECS))
        .pool_max_idle_per_host(10)
        .build()
}
