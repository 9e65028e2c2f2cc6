use medcall::config::Config;
use medcall::infrastructure::persistence::open_store;
use medcall::infrastructure::telephony::TwilioClient;
use medcall::interface::api::{build_router, init_metrics, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting medication reminder relay");

    // Load configuration
    let config = Config::load()?;
    info!("Configuration loaded: {:?}", config);

    let store = open_store(&config.database).await?;

    // One client serves both telephony ports
    let twilio = Arc::new(TwilioClient::new(&config.twilio, config.server.public_url.clone()));
    info!("Twilio client initialized (from {})", config.twilio.from_number);

    info!("Initializing Prometheus metrics exporter");
    let prometheus_handle = init_metrics()?;

    let state = AppState::new(store, twilio.clone(), twilio);
    let app = build_router(state, prometheus_handle);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("REST API server listening on {}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
