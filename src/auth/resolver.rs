// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Access token lookup against the OAuth token service.
//!
//! ## Endpoint
//!
//! `GET {base_url}/oauth/access_tokens/{token_id}`
//!
//! - 2xx: `{"id": string, "user_id": int, "client_id": int}`
//! - otherwise: a [`RestError`] payload, propagated as [`AuthError::Remote`]
//!
//! A single request is made per lookup. Nothing is retried or cached; the
//! client timeout is the only bound on how long a lookup can block.

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::error::{
    AuthError, INVALID_CLIENT_RESPONSE, INVALID_ERROR_INTERFACE, INVALID_TOKEN_RESPONSE,
};
use super::token::ResolvedToken;
use crate::config::TokenServiceConfig;
use crate::error::RestError;

const TOKEN_NOT_FOUND: &str = "no access token found with given id";

/// Token service client.
///
/// Built once at startup and shared; `reqwest::Client` pools connections
/// internally and is cheap to clone.
#[derive(Debug, Clone)]
pub struct TokenResolver {
    config: TokenServiceConfig,
    client: Client,
}

impl TokenResolver {
    pub fn new(config: TokenServiceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Lookup URL for a token id. The id is encoded as a single path segment.
    ///
    /// `.` and `..` are dropped by URL path normalization even when
    /// percent-encoded, so they cannot address a token and resolve as not found.
    pub fn token_url(&self, token_id: &str) -> Result<Url, AuthError> {
        if matches!(token_id, "." | "..") {
            return Err(AuthError::Remote(RestError::not_found(TOKEN_NOT_FOUND)));
        }

        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AuthError::internal(INVALID_CLIENT_RESPONSE, "base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["oauth", "access_tokens", token_id]);
        Ok(url)
    }

    /// Resolve a token id into its caller and client identities.
    pub async fn fetch_token(&self, token_id: &str) -> Result<ResolvedToken, AuthError> {
        let url = self.token_url(token_id)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, "token service unreachable");
            AuthError::internal(INVALID_CLIENT_RESPONSE, e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, %status, "failed to read token service response");
            AuthError::internal(INVALID_CLIENT_RESPONSE, e)
        })?;

        if status.as_u16() > 299 {
            let remote = RestError::from_bytes(&body).map_err(|e| {
                warn!(error = %e, %status, "token service returned an unparseable error");
                AuthError::internal(INVALID_ERROR_INTERFACE, e)
            })?;
            debug!(%status, remote_status = remote.status, "token service rejected lookup");
            return Err(AuthError::Remote(remote));
        }

        serde_json::from_slice::<ResolvedToken>(&body).map_err(|e| {
            warn!(error = %e, %status, "token service returned an unparseable token");
            AuthError::internal(INVALID_TOKEN_RESPONSE, e)
        })
    }
}
