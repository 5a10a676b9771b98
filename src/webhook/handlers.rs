use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::models::{FulfillmentResponse, WebhookRequest};
use super::service::WebhookError;
use crate::AppState;

/// Fulfill a chat request
///
/// POST /webhook
#[utoipa::path(
    post,
    path = "/webhook",
    tag = "webhook",
    request_body = WebhookRequest,
    responses(
        (status = 200, description = "Reply text, plus weather data when available", body = FulfillmentResponse),
        (status = 400, description = "Missing queryResult or geo-city", body = FulfillmentResponse),
        (status = 500, description = "Weather provider failure", body = FulfillmentResponse)
    )
)]
pub async fn webhook(
    State(state): State<AppState>,
    payload: Result<Json<WebhookRequest>, JsonRejection>,
) -> Result<Json<FulfillmentResponse>, WebhookError> {
    // A body that is not the expected JSON is treated like a missing envelope
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Webhook body rejected");
        WebhookError::MissingQueryResult
    })?;

    let response = state.webhook_service.handle(request).await?;
    Ok(Json(response))
}
