// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{middleware, routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{auth::middleware::authenticate_request, error::RestError, state::AppState};

pub mod health;
pub mod identity;

/// Every route runs behind the authentication middleware, including the
/// health probe, so spoofed identity headers never reach a handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::liveness))
        .route("/v1/identity", get(identity::get_identity))
        .route("/api-doc/openapi.json", get(openapi_json))
        .layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            authenticate_request,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[derive(OpenApi)]
#[openapi(
    paths(health::liveness, identity::get_identity),
    components(schemas(health::HealthResponse, identity::IdentityResponse, RestError)),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Identity", description = "Resolved caller and client identity")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::auth::resolver::tests::resolver_for;
    use crate::auth::{Authenticator, TokenResolver};
    use crate::config::TokenServiceConfig;

    fn app_for(server: &MockServer) -> Router {
        router(AppState::new(Authenticator::new(resolver_for(server))))
    }

    async fn get_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_is_public() {
        let server = MockServer::start().await;
        let (status, body) = get_json(app_for(&server), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn identity_is_resolved_from_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/oauth/access_tokens/abc123"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "abc123", "user_id": 42, "client_id": 7})),
            )
            .mount(&server)
            .await;

        let request = Request::builder()
            .uri("/v1/identity?access_token=abc123")
            .header("X-Caller-Id", "1")
            .body(Body::empty())
            .unwrap();
        let (status, body) = get_json(app_for(&server), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"public": false, "caller_id": 42, "client_id": 7}));
    }

    #[tokio::test]
    async fn spoofed_identity_is_dropped_without_token() {
        let server = MockServer::start().await;
        let request = Request::builder()
            .uri("/v1/identity")
            .header("X-Caller-Id", "1")
            .header("X-Client-Id", "1")
            .header("X-Public", "true")
            .body(Body::empty())
            .unwrap();
        let (status, body) = get_json(app_for(&server), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"public": true, "caller_id": 0, "client_id": 0}));
    }

    #[tokio::test]
    async fn unknown_token_is_anonymous() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/oauth/access_tokens/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(RestError::not_found("no access token found")),
            )
            .mount(&server)
            .await;

        let (status, body) =
            get_json(app_for(&server), get("/v1/identity?access_token=missing")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["caller_id"], 0);
        assert_eq!(body["client_id"], 0);
    }

    #[tokio::test]
    async fn remote_error_is_returned_verbatim() {
        let server = MockServer::start().await;
        let remote = json!({
            "status": 401,
            "message": "access token expired",
            "error": "unauthorized",
            "causes": ["expired"]
        });
        Mock::given(method("GET"))
            .and(path("/api/oauth/access_tokens/abc123"))
            .respond_with(ResponseTemplate::new(401).set_body_json(remote.clone()))
            .mount(&server)
            .await;

        let (status, body) =
            get_json(app_for(&server), get("/v1/identity?access_token=abc123")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, remote);
    }

    #[tokio::test]
    async fn token_service_timeout_is_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/oauth/access_tokens/abc123"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(1)))
            .mount(&server)
            .await;

        let config =
            TokenServiceConfig::new(&format!("{}/api", server.uri()), Duration::from_millis(100))
                .unwrap();
        let state = AppState::new(Authenticator::new(TokenResolver::new(config).unwrap()));

        let (status, body) =
            get_json(router(state), get("/v1/identity?access_token=abc123")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["message"],
            "invalid rest client response when trying to get access token"
        );
        assert_eq!(body["error"], "internal_server_error");
    }

    #[tokio::test]
    async fn openapi_document_lists_routes() {
        let server = MockServer::start().await;
        let (status, body) = get_json(app_for(&server), get("/api-doc/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/health"].is_object());
        assert!(body["paths"]["/v1/identity"].is_object());
    }
}
