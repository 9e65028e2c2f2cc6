//! Prometheus metrics handler

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder and describe the relay's metrics
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(
        "webhook_call_status_total",
        "Status callbacks received, by dispatch branch"
    );
    describe_counter!(
        "fallback_messages_total",
        "Fallback SMS attempts, by outcome"
    );
    describe_counter!(
        "transcriptions_saved_total",
        "Transcription callbacks persisted"
    );
    describe_counter!(
        "outbound_calls_total",
        "Outbound reminder call attempts, by outcome"
    );

    Ok(handle)
}

/// Render metrics in Prometheus text format
pub async fn metrics_handler(State(prometheus_handle): State<PrometheusHandle>) -> Response {
    (StatusCode::OK, prometheus_handle.render()).into_response()
}

/// Record one status callback
pub fn record_call_status(branch: &'static str) {
    counter!("webhook_call_status_total", "branch" => branch).increment(1);
}

/// Record one fallback SMS attempt
pub fn record_fallback_message(outcome: &'static str) {
    counter!("fallback_messages_total", "outcome" => outcome).increment(1);
}

/// Record one stored transcription
pub fn record_transcription_saved() {
    counter!("transcriptions_saved_total").increment(1);
}

/// Record one outbound call attempt
pub fn record_outbound_call(success: bool) {
    let outcome = if success { "initiated" } else { "failed" };
    counter!("outbound_calls_total", "outcome" => outcome).increment(1);
}
