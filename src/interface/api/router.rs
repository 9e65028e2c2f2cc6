//! API Router configuration

use super::metrics_handler::metrics_handler;
use super::response_handler::{analyze_responses, list_responses};
use super::state::AppState;
use super::voice_handler::{call_status, incoming_call, initiate_call, save_transcription, voice_prompt};
use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Service banner served at the root
pub const BANNER: &str = "Medication Reminder System API is running...";

async fn root() -> &'static str {
    BANNER
}

async fn health_check() -> &'static str {
    "OK"
}

/// Build the API router
pub fn build_router(state: AppState, prometheus_handle: PrometheusHandle) -> Router {
    // Provider webhooks and call control
    let voice_routes = Router::new()
        .route("/voice", post(voice_prompt))
        .route("/call", post(initiate_call))
        .route("/call-status", post(call_status))
        .route("/transcription", post(save_transcription))
        .route("/incoming-call", post(incoming_call));

    // Response analysis
    let response_routes = Router::new()
        .route("/responses", get(list_responses))
        .route("/analyze-responses", get(analyze_responses));

    // Metrics route (separate state)
    let metrics_routes = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api", voice_routes.merge(response_routes))
        .with_state(state)
        .merge(metrics_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
