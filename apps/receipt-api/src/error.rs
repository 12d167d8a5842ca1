//! API Error types
//!
//! ```text
//! MalformedInput                 → 400 "invalid input"
//! Scoring(RuleError) by rule     → 400 "invalid total" | "invalid item price"
//!                                      | "invalid purchase date" | "invalid purchase time"
//! Store(NotFound)                → 404 "receipt id not found"
//! Store(DuplicateId/LockPoisoned)→ 500 "internal error"
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use receipt_core::{Rule, RuleError};
use receipt_store::StoreError;
use thiserror::Error;

use crate::dto::ErrorResponse;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Body could not be decoded into a receipt
    #[error("Malformed receipt: {0}")]
    MalformedInput(String),

    /// A scoring rule rejected one of the receipt's fields
    #[error("Scoring failed: {0}")]
    Scoring(#[from] RuleError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_) | ApiError::Scoring(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client
    pub fn client_message(&self) -> &'static str {
        match self {
            ApiError::MalformedInput(_) => "invalid input",
            ApiError::Scoring(err) => match err.rule {
                Rule::RoundTotal | Rule::QuarterMultiple => "invalid total",
                Rule::ItemDescriptions => "invalid item price",
                Rule::OddPurchaseDay => "invalid purchase date",
                Rule::AfternoonPurchase => "invalid purchase time",
                Rule::RetailerName | Rule::ItemPairs => "invalid input",
            },
            ApiError::Store(StoreError::NotFound { .. }) => "receipt id not found",
            ApiError::Store(_) => "internal error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: self.client_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use receipt_core::ValidationError;

    use super::*;

    fn rule_error(rule: Rule) -> ApiError {
        ApiError::Scoring(RuleError::new(
            rule,
            ValidationError::InvalidFormat {
                field: "x".to_string(),
                reason: "bad".to_string(),
            },
        ))
    }

    #[test]
    fn test_scoring_errors_are_bad_requests_with_field_messages() {
        let cases = [
            (Rule::RoundTotal, "invalid total"),
            (Rule::QuarterMultiple, "invalid total"),
            (Rule::ItemDescriptions, "invalid item price"),
            (Rule::OddPurchaseDay, "invalid purchase date"),
            (Rule::AfternoonPurchase, "invalid purchase time"),
        ];

        for (rule, message) in cases {
            let err = rule_error(rule);
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.client_message(), message);
        }
    }

    #[test]
    fn test_malformed_input() {
        let err = ApiError::MalformedInput("missing field `total`".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "invalid input");
    }

    #[test]
    fn test_store_errors() {
        let err = ApiError::from(StoreError::not_found("abc"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.client_message(), "receipt id not found");

        let err = ApiError::from(StoreError::LockPoisoned);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "internal error");

        let err = ApiError::from(StoreError::duplicate("abc"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::from(StoreError::not_found("abc")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
