//! # API Error Type
//!
//! Unified error type for the page handlers.
//!
//! The cart operations themselves have no failure modes (unknown ids
//! are no-ops, quantities clamp), so the only error a route can emit
//! is a validation failure on a malformed request, currently just an
//! unrecognized summary-section slug.
//!
//! ## Serialization
//! What a script client receives when a request fails:
//! ```json
//! {
//!   "code": "VALIDATION_ERROR",
//!   "message": "unknown summary section: gift-wrap"
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// API error returned from handlers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable error message for display.
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (400).
    ValidationError,
}

impl ApiError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Handlers return `Result<_, ApiError>`; axum turns the error into a
/// status + JSON body pair.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = ApiError::validation("unknown summary section: gift-wrap");
        assert_eq!(
            err.to_string(),
            "[ValidationError] unknown summary section: gift-wrap"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::validation("bad section").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(ApiError::validation("nope")).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "nope");
    }
}
