// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Resolves opaque access tokens into caller and client identities.
//!
//! ## Auth Flow
//!
//! 1. Client calls any endpoint with `?access_token=<token id>`
//! 2. Inbound `X-Caller-Id` / `X-Client-Id` headers are stripped
//! 3. The token id is looked up at the OAuth service
//!    (`GET /oauth/access_tokens/{id}`)
//! 4. On success:
//!    - `user_id` → `X-Caller-Id`
//!    - `client_id` → `X-Client-Id`
//!
//! ## Security
//!
//! - Identity headers are only trusted when written by this module
//! - An unknown token demotes the request to anonymous; it is not rejected
//! - Any other lookup failure rejects the request
//! - Lookups are never cached or retried

pub mod authenticator;
pub mod error;
pub mod extractor;
pub mod headers;
pub mod middleware;
pub mod resolver;
pub mod token;

pub use authenticator::{AuthenticationOutcome, Authenticator};
pub use error::AuthError;
pub use extractor::Identity;
pub use headers::{get_caller_id, get_client_id, is_public, reset_identity_headers};
pub use resolver::TokenResolver;
pub use token::ResolvedToken;
