//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps the three rejection axes to HTTP status codes: a body that cannot
//! be decoded (400), a receipt that decodes but fails validation (422),
//! and a points lookup for an unknown identifier (404). Internal error
//! details are never exposed in responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses use this format. The `details` field carries
/// additional context for client errors and is omitted otherwise.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details, present only for client errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// No score recorded under the requested identifier (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The receipt decoded but failed a validation rule (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// The request body could not be decoded as a receipt at all (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500). Message is logged but not returned
    /// to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert core validation errors to the 422 axis.
impl From<tally_core::ValidationError> for AppError {
    fn from(err: tally_core::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status_code() {
        let err = AppError::NotFound("missing receipt".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
    }

    #[test]
    fn validation_status_code() {
        let err = AppError::Validation("bad total".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[test]
    fn bad_request_status_code() {
        let err = AppError::BadRequest("malformed JSON".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "BAD_REQUEST");
    }

    #[test]
    fn internal_status_code() {
        let err = AppError::Internal("store failure".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
    }

    #[test]
    fn error_display_messages() {
        assert!(format!("{}", AppError::NotFound("x".into())).contains("x"));
        assert!(format!("{}", AppError::Validation("y".into())).contains("y"));
        assert!(format!("{}", AppError::BadRequest("z".into())).contains("z"));
        assert!(format!("{}", AppError::Internal("d".into())).contains("d"));
    }

    #[test]
    fn validation_error_from_core() {
        let core_err = tally_core::ValidationError::InvalidAmount("1.5".to_string());
        let app_err = AppError::from(core_err);
        match &app_err {
            AppError::Validation(msg) => assert!(msg.contains("1.5"), "got: {msg}"),
            other => panic!("expected Validation, got: {other:?}"),
        }
    }

    #[test]
    fn error_body_serializes() {
        let body = ErrorBody {
            error: ErrorDetail {
                code: "TEST".to_string(),
                message: "test message".to_string(),
                details: None,
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("TEST"));
        assert!(json.contains("test message"));
        assert!(!json.contains("details")); // skipped when None
    }

    // ── into_response tests ──────────────────────────────────────

    use http_body_util::BodyExt;

    /// Helper to extract status and body from a Response.
    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_not_found() {
        let (status, body) = response_parts(AppError::NotFound("receipt 123".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.code, "NOT_FOUND");
        assert!(body.error.message.contains("receipt 123"));
        assert!(body.error.details.is_none());
    }

    #[tokio::test]
    async fn into_response_validation() {
        let (status, body) = response_parts(AppError::Validation("bad retailer".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert!(body.error.message.contains("bad retailer"));
    }

    #[tokio::test]
    async fn into_response_bad_request() {
        let (status, body) = response_parts(AppError::BadRequest("malformed".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.code, "BAD_REQUEST");
        assert!(body.error.message.contains("malformed"));
    }

    #[tokio::test]
    async fn into_response_internal_hides_details() {
        let (status, body) = response_parts(AppError::Internal("store exploded".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.code, "INTERNAL_ERROR");
        // The internal error message must NOT appear in the response body.
        assert!(
            !body.error.message.contains("store exploded"),
            "internal error details must not leak: {}",
            body.error.message
        );
        assert_eq!(body.error.message, "An internal error occurred");
    }
}
