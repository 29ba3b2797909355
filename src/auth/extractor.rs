// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the resolved identity.
//!
//! Reads the trusted headers written by the authentication middleware:
//!
//! ```rust,ignore
//! async fn my_handler(identity: Identity) -> impl IntoResponse {
//!     if identity.caller_id == 0 {
//!         // anonymous request
//!     }
//! }
//! ```
//!
//! Only meaningful behind `authenticate_request`; without it the headers are
//! whatever the client sent.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use super::headers::{caller_id, client_id, is_public_header};

/// Identity of the caller, as stamped on the request.
///
/// Ids are 0 when absent. Never rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    /// `X-Public: true` was sent
    pub public: bool,
    /// From `X-Caller-Id`
    pub caller_id: i64,
    /// From `X-Client-Id`
    pub client_id: i64,
}

impl Identity {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            public: is_public_header(headers),
            caller_id: caller_id(headers),
            client_id: client_id(headers),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.caller_id != 0 || self.client_id != 0
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Identity::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn extracts_identity_headers() {
        let mut parts = Request::builder()
            .uri("/test")
            .header("X-Caller-Id", "42")
            .header("X-Client-Id", "7")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let identity = Identity::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(
            identity,
            Identity {
                public: false,
                caller_id: 42,
                client_id: 7,
            }
        );
        assert!(identity.is_authenticated());
    }

    #[tokio::test]
    async fn anonymous_when_headers_missing() {
        let mut parts = Request::builder()
            .uri("/test")
            .header("X-Public", "true")
            .header("X-Caller-Id", "not-a-number")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let identity = Identity::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(identity.public);
        assert_eq!(identity.caller_id, 0);
        assert!(!identity.is_authenticated());
    }
}
