// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Structured REST error shared with the OAuth token service.
//!
//! The token service answers every non-2xx response with this shape, and the
//! authentication middleware answers with it too, so upstream callers see a
//! single error format regardless of where the failure started.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire error: `{"status", "message", "error", "causes"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestError {
    /// HTTP status code the error stands for.
    pub status: u16,
    /// Human readable message.
    pub message: String,
    /// Machine readable error kind (e.g. `not_found`).
    #[serde(default)]
    pub error: String,
    /// Underlying causes, outermost first.
    #[serde(default)]
    pub causes: Vec<String>,
}

impl RestError {
    pub fn new(status: StatusCode, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            error: error.into(),
            causes: Vec::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, "not_found")
    }

    pub fn internal_server_error(message: impl Into<String>, cause: impl Into<String>) -> Self {
        let mut err = Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            "internal_server_error",
        );
        err.causes.push(cause.into());
        err
    }

    /// Parse an error payload returned by the token service.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Status as an HTTP status code; out-of-range values become 500.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND.as_u16()
    }
}

impl std::fmt::Display for RestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.status, self.error, self.message)
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn constructors_set_status_and_kind() {
        let nf = RestError::not_found("missing");
        assert_eq!(nf.status, 404);
        assert_eq!(nf.error, "not_found");
        assert!(nf.is_not_found());

        let bad = RestError::new(StatusCode::BAD_REQUEST, "bad", "bad_request");
        assert_eq!(bad.status, 400);
        assert_eq!(bad.message, "bad");
        assert!(!bad.is_not_found());

        let internal = RestError::internal_server_error("boom", "network timeout");
        assert_eq!(internal.status, 500);
        assert_eq!(internal.error, "internal_server_error");
        assert_eq!(internal.causes, vec!["network timeout".to_string()]);
    }

    #[test]
    fn from_bytes_tolerates_missing_kind_and_causes() {
        let err = RestError::from_bytes(br#"{"status":401,"message":"expired"}"#).unwrap();
        assert_eq!(err.status, 401);
        assert_eq!(err.message, "expired");
        assert!(err.error.is_empty());
        assert!(err.causes.is_empty());
    }

    #[test]
    fn from_bytes_rejects_non_json() {
        assert!(RestError::from_bytes(b"<html>bad gateway</html>").is_err());
        assert!(RestError::from_bytes(br#"{"message":"no status"}"#).is_err());
    }

    #[test]
    fn out_of_range_status_maps_to_500() {
        let err = RestError {
            status: 42,
            message: "weird".to_string(),
            error: String::new(),
            causes: Vec::new(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn into_response_returns_json_body() {
        let response = RestError::new(StatusCode::BAD_REQUEST, "bad data", "bad_request").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "bad data");
        assert_eq!(body["error"], "bad_request");
        assert_eq!(body["causes"], serde_json::json!([]));
    }
}
