// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication middleware for Axum.
//!
//! Runs [`Authenticator::authenticate`] on every request before it reaches
//! a handler. Failures short-circuit with the error's JSON body; anonymous
//! and authenticated requests both continue, distinguished only by the
//! identity headers.
//!
//! ```rust,ignore
//! let authenticator = Arc::new(Authenticator::new(TokenResolver::new(config)?));
//!
//! let app = Router::new()
//!     .route("/items", get(list_items))
//!     .layer(axum::middleware::from_fn_with_state(
//!         authenticator,
//!         authenticate_request,
//!     ));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use super::Authenticator;

/// Authentication middleware function.
pub async fn authenticate_request(
    State(authenticator): State<Arc<Authenticator>>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticator.authenticate(Some(&mut request)).await {
        Ok(()) => next.run(request).await,
        Err(e) => {
            warn!(
                status = %e.status_code(),
                error = %e,
                path = %request.uri().path(),
                "request authentication failed"
            );
            e.into_response()
        }
    }
}
