use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::webhook::FulfillmentResponse;

/// Trait for errors that can be converted to webhook responses
///
/// Every failure still answers with a `fulfillmentText` the chat can show,
/// so the trait separates the user-facing text from the logged error.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Text shown to the user. Must not leak internal detail.
    fn fulfillment_text(&self) -> String;
}

/// Convert any HttpError into an Axum response
pub fn into_response<E: HttpError>(err: E) -> Response {
    let status = err.status_code();

    if status.is_server_error() {
        tracing::error!(error = %err, status = %status, "Webhook error");
    } else {
        tracing::warn!(error = %err, status = %status, "Rejected webhook request");
    }

    let body = FulfillmentResponse::text(err.fulfillment_text());

    (status, Json(body)).into_response()
}

/// Macro to implement IntoResponse for HttpError types
#[macro_export]
macro_rules! impl_into_response {
    ($error_type:ty) => {
        impl axum::response::IntoResponse for $error_type {
            fn into_response(self) -> axum::response::Response {
                $crate::error::into_response(self)
            }
        }
    };
}
