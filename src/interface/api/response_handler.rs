//! Call response query handlers

use axum::{extract::State, Json};
use tracing::info;

use super::call_dto::ApiError;
use super::state::AppState;
use crate::domain::call_record::CallRecord;
use crate::domain::classifier::ClassificationResult;

/// List every stored response
pub async fn list_responses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CallRecord>>, ApiError> {
    info!("API: Listing call responses");

    let records = state
        .responses
        .list()
        .await
        .map_err(|e| ApiError::from_store(&e, "Failed to fetch responses"))?;
    Ok(Json(records))
}

/// Confirmed/unclear counts over every stored response
pub async fn analyze_responses(
    State(state): State<AppState>,
) -> Result<Json<ClassificationResult>, ApiError> {
    info!("API: Analyzing call responses");

    let result = state
        .responses
        .analyze()
        .await
        .map_err(|e| ApiError::from_store(&e, "Failed to analyze responses"))?;
    Ok(Json(result))
}
