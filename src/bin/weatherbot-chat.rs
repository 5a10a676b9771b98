use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weatherbot::chat::{render_message, ChatSession, Vocabulary};
use weatherbot::config::AppConfig;
use weatherbot::create_http_client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the conversation
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weatherbot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load()?;
    tracing::info!(webhook_url = %config.webhook_url, "Starting chat client");

    let mut session = ChatSession::new(
        create_http_client()?,
        config.webhook_url.clone(),
        Vocabulary::default(),
    );

    for message in session.transcript().messages() {
        println!("{}", render_message(message));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let seen = session.transcript().len();
        session.submit(&line).await;

        // The user's own line is already on screen
        for message in session.transcript().since(seen + 1) {
            println!("{}", render_message(message));
        }
    }

    Ok(())
}
