use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weatherbot::config::AppConfig;
use weatherbot::routes::build_router;
use weatherbot::weather::OpenWeatherClient;
use weatherbot::webhook::WebhookService;
use weatherbot::{create_http_client, AppState};

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl+c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weatherbot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    let api_key = config.api_key()?;
    tracing::info!("Configuration loaded successfully");

    // Create shared HTTP client with connection pooling
    let http_client = create_http_client()?;
    tracing::debug!("Shared HTTP client created");

    let provider = OpenWeatherClient::new(
        http_client,
        api_key,
        &config.provider_base_url,
    );
    let webhook_service = Arc::new(WebhookService::new(Arc::new(provider)));

    let addr = format!("{}:{}", config.host, config.port);

    // Create shared application state
    let state = AppState {
        webhook_service,
        config: Arc::new(config),
    };

    let app = build_router(state);

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
