// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::RestError;

pub const INVALID_CLIENT_RESPONSE: &str =
    "invalid rest client response when trying to get access token";
pub const INVALID_ERROR_INTERFACE: &str =
    "invalid error interface when trying to get access token";
pub const INVALID_TOKEN_RESPONSE: &str = "error when trying to unmarshal access token response";

/// Failure resolving an access token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Transport failure or a payload that could not be parsed.
    #[error("{message}: {cause}")]
    Internal { message: String, cause: String },

    /// Structured error returned by the token service, kept verbatim.
    #[error("token service error {0}")]
    Remote(RestError),
}

impl AuthError {
    pub fn internal(message: impl Into<String>, cause: impl ToString) -> Self {
        AuthError::Internal {
            message: message.into(),
            cause: cause.to_string(),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::Remote(err) => err.status_code(),
        }
    }

    /// The token service reported that the token does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AuthError::Remote(err) if err.is_not_found())
    }

    pub fn message(&self) -> &str {
        match self {
            AuthError::Internal { message, .. } => message,
            AuthError::Remote(err) => &err.message,
        }
    }

    pub fn to_rest_error(&self) -> RestError {
        match self {
            AuthError::Internal { message, cause } => {
                RestError::internal_server_error(message.clone(), cause.clone())
            }
            AuthError::Remote(err) => err.clone(),
        }
    }
}

impl From<AuthError> for RestError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Internal { message, cause } => {
                RestError::internal_server_error(message, cause)
            }
            AuthError::Remote(err) => err,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        RestError::from(self).into_response()
    }
}
