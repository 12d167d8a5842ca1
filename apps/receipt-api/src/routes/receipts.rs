//! Receipt scoring and lookup endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use receipt_core::validation::validate_receipt_id;
use receipt_core::{score_receipt, Receipt, ScoreRecord};
use tracing::{debug, info, warn};

use crate::dto::{PointsResponse, ProcessReceiptResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Score a receipt and remember the result
///
/// Scoring is all-or-nothing: if any rule cannot parse its field, nothing
/// is stored and the client gets a 400.
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let Json(receipt) = payload.map_err(|rejection| {
        let reason = rejection.body_text();
        warn!(%reason, "Rejected malformed receipt");
        ApiError::MalformedInput(reason)
    })?;

    let breakdown = score_receipt(&receipt).map_err(|err| {
        warn!(rule = %err.rule, field = err.field(), error = %err.source, "Receipt failed validation");
        ApiError::from(err)
    })?;
    debug!(retailer = %receipt.retailer, ?breakdown, "Scored receipt");

    let record = ScoreRecord::new(breakdown.total());
    let id = record.id.clone();
    let points = record.points;
    state.store.put(record)?;

    info!(%id, points, "Receipt processed");
    Ok(Json(ProcessReceiptResponse { id }))
}

/// Look up the points of a processed receipt
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    if let Err(err) = validate_receipt_id(&id) {
        debug!(%id, error = %err, "Lookup id is not a UUID");
    }

    let record = state.store.get(&id).map_err(|err| {
        if err.is_not_found() {
            warn!(%id, "Unknown receipt id");
        }
        err
    })?;

    Ok(Json(PointsResponse {
        points: record.points,
    }))
}
