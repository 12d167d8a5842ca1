//! Request/response bodies
//!
//! The request body is [`receipt_core::Receipt`] itself.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Response to `POST /receipts/process`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Response to `GET /receipts/{id}/points`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsResponse {
    #[ts(type = "number")]
    pub points: u64,
}

/// Response to `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[ts(type = "number")]
    pub receipts: usize,
}

/// Error body for every 4xx/5xx this API produces
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}
