// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Identity echo endpoint.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::Identity;
use crate::error::RestError;

/// Response for GET /v1/identity
#[derive(Debug, Serialize, ToSchema)]
pub struct IdentityResponse {
    /// Whether the caller flagged the request as public
    pub public: bool,
    /// Resolved end-user id (0 when anonymous)
    pub caller_id: i64,
    /// Resolved application id (0 when anonymous)
    pub client_id: i64,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            public: identity.public,
            caller_id: identity.caller_id,
            client_id: identity.client_id,
        }
    }
}

/// Echo the identity resolved for this request.
#[utoipa::path(
    get,
    path = "/v1/identity",
    tag = "Identity",
    params(
        ("access_token" = Option<String>, Query, description = "Opaque access token id")
    ),
    responses(
        (status = 200, description = "Resolved identity", body = IdentityResponse),
        (status = 500, description = "Token service failure", body = RestError),
    )
)]
pub async fn get_identity(identity: Identity) -> Json<IdentityResponse> {
    Json(identity.into())
}
