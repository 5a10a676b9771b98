use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    BoxError, Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::ToSchema;

use crate::openapi::swagger_ui;
use crate::webhook::{handlers as webhook_handlers, FulfillmentResponse, SERVICE_FAILURE_TEXT};
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String)]
    pub status: &'static str,
    #[schema(value_type = String)]
    pub version: &'static str,
}

/// Health check endpoint
#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, body = HealthResponse)))]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Middleware failures, including the whole-request timeout, get the generic 500 reply
async fn handle_timeout_error(err: BoxError) -> (StatusCode, Json<FulfillmentResponse>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::error!("Webhook request timed out");
    } else {
        tracing::error!(error = %err, "Unhandled middleware error");
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FulfillmentResponse::text(SERVICE_FAILURE_TEXT)),
    )
}

/// CORS for the browser chat page
fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    match origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            tracing::warn!(origin = %origin, error = %e, "Invalid CORS origin, cross-origin requests disabled");
            layer
        }
    }
}

/// Build the complete application router
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let cors = cors_layer(&state.config.cors_origin);

    Router::new()
        // Health check
        .route("/", get(health))
        .route("/health", get(health))
        // Chat fulfillment
        .route("/webhook", post(webhook_handlers::webhook))
        // Swagger UI for API documentation
        .merge(swagger_ui())
        .layer(
            ServiceBuilder::new()
                // Handle timeout errors
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(timeout),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request, response::Response};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::AppConfig;
    use crate::weather::OpenWeatherClient;
    use crate::webhook::WebhookService;

    fn test_config(provider_url: &str) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            openweathermap_api_key: Some("test_api_key".to_string()),
            provider_base_url: provider_url.to_string(),
            cors_origin: "http://localhost:3001".to_string(),
            request_timeout_secs: 5,
            webhook_url: "http://localhost:3000/webhook".to_string(),
        }
    }

    fn test_app(server: &MockServer) -> Router {
        app_with_config(test_config(&server.uri()))
    }

    fn app_with_config(config: AppConfig) -> Router {
        let provider = OpenWeatherClient::new(
            reqwest::Client::new(),
            "test_api_key",
            &config.provider_base_url,
        );
        build_router(AppState {
            webhook_service: Arc::new(WebhookService::new(Arc::new(provider))),
            config: Arc::new(config),
        })
    }

    fn webhook_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/webhook")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn envelope(intent: &str, city: Option<&str>) -> Value {
        json!({
            "queryResult": {
                "intent": { "displayName": intent },
                "parameters": { "geo-city": city, "date": "" }
            }
        })
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;

        let response = test_app(&server)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_current_weather() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "weather": [{ "main": "Rain", "description": "moderate rain" }],
                "main": { "temp": 7.5, "temp_min": 5.2, "temp_max": 9.8, "humidity": 87 },
                "wind": { "speed": 6.2 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = test_app(&server)
            .oneshot(webhook_request(envelope("CurrentWeatherIntent", Some("London"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let text = body["fulfillmentText"].as_str().unwrap();
        assert!(text.starts_with("Current weather in London:"));
        assert!(text.contains("🌡️ Temperature: 8°C"));
        assert!(text.contains("High: 10°C | 🔻 Low: 5°C"));
        assert!(text.contains("💧 Humidity: 87%"));
        assert!(text.contains("Wind: 6.2 m/s"));
        assert_eq!(body["weatherData"]["city"], "London");
        assert_eq!(body["weatherData"]["current"]["temp"], 8);
        assert_eq!(body["weatherData"]["current"]["condition"], "Rain");
    }

    #[tokio::test]
    async fn test_forecast() {
        let server = MockServer::start().await;
        // 2024-01-15 09:00 and 12:00 UTC, then 2024-01-16 00:00 UTC
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "list": [
                    { "dt": 1705309200, "main": { "temp": 10.0, "temp_min": 9.0, "temp_max": 11.0 },
                      "weather": [{ "main": "Snow", "description": "light snow" }] },
                    { "dt": 1705320000, "main": { "temp": 20.0, "temp_min": 18.0, "temp_max": 21.0 },
                      "weather": [{ "main": "Clear", "description": "clear sky" }] },
                    { "dt": 1705363200, "main": { "temp": 4.0, "temp_min": 3.0, "temp_max": 5.0 },
                      "weather": [{ "main": "Fog", "description": "fog" }] }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = test_app(&server)
            .oneshot(webhook_request(envelope("8DayForecastIntent", Some("Berlin"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["fulfillmentText"],
            "8-day forecast for Berlin:\n\
             1. Mon, Jan 15: ❄️ light snow\n   🌡️ 15°C (High: 21°C, Low: 9°C)\n\n\
             2. Tue, Jan 16: 🌁 fog\n   🌡️ 4°C (High: 5°C, Low: 3°C)\n\n"
        );
        let days = body["weatherData"]["forecast"].as_array().unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0]["date"], "2024-01-15");
        assert_eq!(days[0]["avgTempC"], 15.0);
    }

    #[tokio::test]
    async fn test_unknown_city_is_a_reply() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "cod": "404", "message": "city not found" })),
            )
            .mount(&server)
            .await;

        let response = test_app(&server)
            .oneshot(webhook_request(envelope(
                "CurrentWeatherIntent",
                Some("NoSuchPlace123"),
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["fulfillmentText"]
            .as_str()
            .unwrap()
            .contains("NoSuchPlace123"));
        assert!(body.get("weatherData").is_none());
    }

    #[tokio::test]
    async fn test_unknown_intent_makes_no_provider_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let response = test_app(&server)
            .oneshot(webhook_request(envelope("UnknownIntent", Some("Paris"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["fulfillmentText"]
            .as_str()
            .unwrap()
            .starts_with("I'm not sure how to handle that request."));
    }

    #[tokio::test]
    async fn test_missing_city() {
        let server = MockServer::start().await;

        let response = test_app(&server)
            .oneshot(webhook_request(envelope("CurrentWeatherIntent", None)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["fulfillmentText"],
            "Please provide a city name."
        );
    }

    #[tokio::test]
    async fn test_missing_query_result() {
        let server = MockServer::start().await;

        let response = test_app(&server)
            .oneshot(webhook_request(json!({ "session": "abc" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["fulfillmentText"],
            "Invalid request: Missing queryResult"
        );
    }

    #[tokio::test]
    async fn test_body_not_json() {
        let server = MockServer::start().await;
        let request = Request::builder()
            .method("POST")
            .uri("/webhook")
            .header("content-type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap();

        let response = test_app(&server).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["fulfillmentText"].is_string());
    }

    #[tokio::test]
    async fn test_provider_failure_is_generic_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_json(json!({ "cod": 429, "message": "secret quota detail" })),
            )
            .mount(&server)
            .await;

        let response = test_app(&server)
            .oneshot(webhook_request(envelope("8DayForecastIntent", Some("Rome"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        let text = body["fulfillmentText"].as_str().unwrap();
        assert_eq!(
            text,
            "Sorry, there was an error processing your request. Please try again later."
        );
        assert!(!text.contains("secret quota detail"));
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_chat_origin() {
        let server = MockServer::start().await;
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/webhook")
            .header("origin", "http://localhost:3001")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();

        let response = test_app(&server).oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "http://localhost:3001"
        );
    }

    #[tokio::test]
    async fn test_slow_provider_times_out_with_generic_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;
        let config = AppConfig {
            request_timeout_secs: 1,
            ..test_config(&server.uri())
        };

        let response = app_with_config(config)
            .oneshot(webhook_request(envelope("CurrentWeatherIntent", Some("Paris"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["fulfillmentText"],
            SERVICE_FAILURE_TEXT
        );
    }
}
