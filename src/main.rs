use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use echoroom_core::{CoreConfig, MoodClassifier};

/// Main entry point for the EchoRoom mood service
///
/// Resolves configuration once, then serves the REST API until interrupted.
///
/// # Environment Variables
/// - `ECHOROOM_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `GEMINI_API_KEY`: Gemini API key (required)
/// - `GEMINI_API_BASE`: Gemini models endpoint (default: Google's v1beta models URL)
/// - `GEMINI_MODEL`: Model name (default: "gemini-pro")
/// - `MOOD_TIMEOUT_SECS`: Upstream call timeout in seconds (default: 15)
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("echoroom=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("ECHOROOM_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".into())
        .parse()?;

    let cfg = CoreConfig::from_env()?;
    tracing::info!(
        model = cfg.model(),
        timeout = ?cfg.request_timeout(),
        "-- Mood classifier configured"
    );

    let state = AppState::new(MoodClassifier::from_config(&cfg)?);
    let app = api_rest::router(state);

    tracing::info!("++ Starting EchoRoom REST on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("-- Shutting down");
}
