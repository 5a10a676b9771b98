pub mod handlers;
pub mod models;
mod service;

pub use models::{FulfillmentResponse, Intent, WebhookRequest};
pub use service::{
    WebhookError, WebhookService, SERVICE_FAILURE_TEXT, UNRECOGNIZED_INTENT_TEXT,
};
