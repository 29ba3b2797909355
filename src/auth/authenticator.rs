// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Request authentication.
//!
//! ## Flow
//!
//! 1. Strip inbound `X-Client-Id` / `X-Caller-Id` (never trusted from outside)
//! 2. Read the `access_token` query parameter; absent or blank means anonymous
//! 3. Resolve the token id against the token service
//!    - 404 from the service: anonymous, not an error
//!    - any other failure: returned to the caller unchanged
//! 4. Write both identity headers from the resolved token
//!
//! `X-Public` is not consulted here: a token present on a public request is
//! still resolved.

use axum::http::{HeaderMap, HeaderValue, Request};
use tracing::debug;

use super::error::AuthError;
use super::headers::{access_token_param, clear_identity, X_CALLER_ID, X_CLIENT_ID};
use super::resolver::TokenResolver;
use super::token::ResolvedToken;

/// Result of authenticating one request, before it is written onto headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticationOutcome {
    pub public: bool,
    pub caller_id: Option<i64>,
    pub client_id: Option<i64>,
}

impl AuthenticationOutcome {
    /// No identity: no token supplied, or the token does not exist.
    pub fn anonymous() -> Self {
        Self {
            public: true,
            caller_id: None,
            client_id: None,
        }
    }

    pub fn from_token(token: &ResolvedToken) -> Self {
        Self {
            public: false,
            caller_id: Some(token.caller_id),
            client_id: Some(token.client_id),
        }
    }

    /// Replace the identity headers with this outcome.
    ///
    /// Both headers are written, or neither.
    pub fn apply(&self, headers: &mut HeaderMap) {
        clear_identity(headers);
        if let (Some(caller_id), Some(client_id)) = (self.caller_id, self.client_id) {
            headers.insert(X_CLIENT_ID, HeaderValue::from(client_id));
            headers.insert(X_CALLER_ID, HeaderValue::from(caller_id));
        }
    }
}

/// Resolves `access_token` query parameters into identity headers.
#[derive(Debug, Clone)]
pub struct Authenticator {
    resolver: TokenResolver,
}

impl Authenticator {
    pub fn new(resolver: TokenResolver) -> Self {
        Self { resolver }
    }

    /// Resolve a token id without touching any request.
    pub async fn resolve(&self, token_id: &str) -> Result<AuthenticationOutcome, AuthError> {
        let token_id = token_id.trim();
        if token_id.is_empty() {
            return Ok(AuthenticationOutcome::anonymous());
        }

        match self.resolver.fetch_token(token_id).await {
            Ok(token) => {
                debug!(caller_id = token.caller_id, client_id = token.client_id, "access token resolved");
                Ok(AuthenticationOutcome::from_token(&token))
            }
            Err(err) if err.is_not_found() => {
                debug!("access token not found, continuing anonymously");
                Ok(AuthenticationOutcome::anonymous())
            }
            Err(err) => Err(err),
        }
    }

    /// Authenticate a request in place.
    ///
    /// On `Ok`, the identity headers are either both absent or both set from
    /// the same resolved token. A missing request is a no-op.
    pub async fn authenticate<B>(&self, request: Option<&mut Request<B>>) -> Result<(), AuthError> {
        let Some(request) = request else {
            return Ok(());
        };

        clear_identity(request.headers_mut());

        let Some(token_id) = access_token_param(request.uri()) else {
            return Ok(());
        };

        let outcome = self.resolve(&token_id).await?;
        outcome.apply(request.headers_mut());
        Ok(())
    }
}
