use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::forecast::DailyForecastSummary;
use crate::reply::{CurrentSnapshot, WeatherData};
use crate::routes::HealthResponse;
use crate::webhook::models::{IntentInfo, QueryParameters, QueryResult};
use crate::webhook::{FulfillmentResponse, WebhookRequest};

/// OpenAPI documentation for the weatherbot webhook
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weatherbot API",
        version = "1.0.0",
        description = "Chatbot fulfillment webhook answering current weather and 8-day forecast intents from OpenWeatherMap.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::routes::health,
        crate::webhook::handlers::webhook,
    ),
    tags(
        (name = "webhook", description = "Chat fulfillment"),
        (name = "health", description = "Liveness")
    ),
    components(
        schemas(
            WebhookRequest,
            QueryResult,
            IntentInfo,
            QueryParameters,
            FulfillmentResponse,
            WeatherData,
            CurrentSnapshot,
            DailyForecastSummary,
            HealthResponse,
        )
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
