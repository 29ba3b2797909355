// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use oauth_gate::{
    api::router,
    config::{bind_addr_from_env, json_logs_from_env, TokenServiceConfig, DEFAULT_LOG_FILTER},
    shutdown::shutdown_signal,
    state::AppState,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    if json_logs_from_env() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let config = TokenServiceConfig::from_env().expect("Invalid token service configuration");
    info!(
        base_url = %config.base_url,
        timeout_ms = config.timeout.as_millis() as u64,
        "token service configured"
    );

    let state = AppState::from_config(config).expect("Failed to build token service client");
    let app = router(state);

    let addr = bind_addr_from_env().expect("Failed to parse bind address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    info!("oauth-gate listening on http://{addr} (openapi at /api-doc/openapi.json)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}
