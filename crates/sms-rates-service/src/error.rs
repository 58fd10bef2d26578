//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use sms_rates_core::QuoteError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A quote could not be computed from the given inputs.
    ///
    /// Every [`QuoteError`] collapses to this one observable outcome;
    /// the specific reason survives in the message and details.
    #[error("unable to compute: {0}")]
    UnableToCompute(#[from] QuoteError),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

/// Machine-readable reason for a failed quote.
fn reason_kind(err: &QuoteError) -> &'static str {
    match err {
        QuoteError::InvalidAmount(_) => "invalid_amount",
        QuoteError::UnknownCurrency { .. } => "unknown_currency",
        QuoteError::UnknownCountry { .. } => "unknown_country",
        QuoteError::UnknownMessageType { .. } => "unknown_message_type",
        QuoteError::MissingUnitCost { .. } => "missing_unit_cost",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone(), None),
            Self::UnableToCompute(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "unable_to_compute",
                reason.to_string(),
                Some(serde_json::json!({ "kind": reason_kind(reason) })),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
