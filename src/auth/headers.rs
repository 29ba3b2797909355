// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Identity and visibility headers.
//!
//! `X-Caller-Id` and `X-Client-Id` are trusted only when written by this
//! crate. Inbound copies are always stripped before token resolution.
//!
//! The request-level accessors accept `Option<&Request<B>>` so a missing
//! request is handled explicitly: it is considered public and carries no
//! identity.

use axum::http::{HeaderMap, HeaderName, Request, Uri};

/// Caller-set hint that the request needs no authentication. Read only.
pub const X_PUBLIC: HeaderName = HeaderName::from_static("x-public");

/// Resolved application identity.
pub const X_CLIENT_ID: HeaderName = HeaderName::from_static("x-client-id");

/// Resolved end-user identity.
pub const X_CALLER_ID: HeaderName = HeaderName::from_static("x-caller-id");

/// Query parameter carrying the opaque access token id.
pub const PARAM_ACCESS_TOKEN: &str = "access_token";

/// `true` iff the request is missing or `X-Public` is exactly `"true"`.
pub fn is_public<B>(request: Option<&Request<B>>) -> bool {
    request.map_or(true, |r| is_public_header(r.headers()))
}

/// Caller id from `X-Caller-Id`, or 0 when missing or unparseable.
pub fn get_caller_id<B>(request: Option<&Request<B>>) -> i64 {
    request.map_or(0, |r| caller_id(r.headers()))
}

/// Client id from `X-Client-Id`, or 0 when missing or unparseable.
pub fn get_client_id<B>(request: Option<&Request<B>>) -> i64 {
    request.map_or(0, |r| client_id(r.headers()))
}

/// Remove every `X-Client-Id` and `X-Caller-Id` value.
pub fn reset_identity_headers<B>(request: Option<&mut Request<B>>) {
    if let Some(request) = request {
        clear_identity(request.headers_mut());
    }
}

pub fn is_public_header(headers: &HeaderMap) -> bool {
    headers
        .get(X_PUBLIC)
        .is_some_and(|v| v.as_bytes() == b"true")
}

pub fn caller_id(headers: &HeaderMap) -> i64 {
    parse_id(headers, X_CALLER_ID)
}

pub fn client_id(headers: &HeaderMap) -> i64 {
    parse_id(headers, X_CLIENT_ID)
}

pub(crate) fn clear_identity(headers: &mut HeaderMap) {
    headers.remove(X_CLIENT_ID);
    headers.remove(X_CALLER_ID);
}

/// First `access_token` query value, percent-decoded and trimmed.
///
/// Returns `None` when the parameter is absent or blank.
pub fn access_token_param(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    let (_, value) = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == PARAM_ACCESS_TOKEN)?;

    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_id(headers: &HeaderMap, name: HeaderName) -> i64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(0)
}
