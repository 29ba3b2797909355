// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! oauth-gate - Access Token Request Authenticator
//!
//! Resolves the `access_token` query parameter of inbound requests against
//! the OAuth token service and stamps the resulting identities onto the
//! request as `X-Caller-Id` / `X-Client-Id`.
//!
//! ## Modules
//!
//! - `auth` - Header inspection, token lookup, middleware and extractor
//! - `api` - Identity echo server routes (Axum)
//! - `config` - Environment configuration
//! - `error` - Structured REST error shared with the token service
//! - `shutdown` - Graceful shutdown trigger

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod shutdown;
pub mod state;
