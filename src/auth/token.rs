// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Access token as returned by the token service lookup endpoint.

use serde::Deserialize;

/// Identities resolved from an access token id.
///
/// Built fresh from each lookup response and dropped once its ids have been
/// copied onto the request. A zero id means the service did not report one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResolvedToken {
    /// Token identifier
    #[serde(default)]
    pub id: String,
    /// End user the token was issued to
    #[serde(default, rename = "user_id")]
    pub caller_id: i64,
    /// Application the token was issued to
    #[serde(default)]
    pub client_id: i64,
}
