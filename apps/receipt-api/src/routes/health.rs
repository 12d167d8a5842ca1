//! Health check endpoint

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// Liveness plus the number of scored receipts held in memory
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let receipts = state.store.len()?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        receipts,
    }))
}
