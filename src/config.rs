// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Environment variable names, defaults, and the configuration values built
//! from them. Configuration is read once at startup and injected into the
//! components that need it.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `OAUTH_API_BASE_URL` | Base URL of the OAuth token service | `http://localhost:8080/api` |
//! | `OAUTH_API_TIMEOUT_MS` | Token lookup timeout in milliseconds | `100` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8081` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{net::SocketAddr, time::Duration};

use url::Url;

/// Environment variable name for the token service base URL.
pub const OAUTH_API_BASE_URL_ENV: &str = "OAUTH_API_BASE_URL";

/// Environment variable name for the token lookup timeout (milliseconds).
pub const OAUTH_API_TIMEOUT_MS_ENV: &str = "OAUTH_API_TIMEOUT_MS";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_OAUTH_API_BASE_URL: &str = "http://localhost:8080/api";

/// Lookups are on the request path, so the budget is deliberately tight.
pub const DEFAULT_OAUTH_API_TIMEOUT: Duration = Duration::from_millis(100);

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid token service base URL '{0}': {1}")]
    InvalidBaseUrl(String, String),

    #[error("invalid token service timeout '{0}': expected milliseconds")]
    InvalidTimeout(String),

    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),
}

/// Where and how to reach the OAuth token service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenServiceConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl TokenServiceConfig {
    /// Build a config from a base URL string.
    ///
    /// The URL must be `http` or `https` and able to carry a path.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(base_url.to_string(), e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(
                base_url.to_string(),
                "expected an http(s) URL".to_string(),
            ));
        }

        Ok(Self {
            base_url: parsed,
            timeout,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(OAUTH_API_BASE_URL_ENV)
            .unwrap_or_else(|| DEFAULT_OAUTH_API_BASE_URL.to_string());

        let timeout = match lookup(OAUTH_API_TIMEOUT_MS_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => DEFAULT_OAUTH_API_TIMEOUT,
        };

        Self::new(&base_url, timeout)
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_OAUTH_API_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_OAUTH_API_TIMEOUT,
        }
    }
}

/// Bind address for the identity echo server.
pub fn bind_addr_from_env() -> Result<SocketAddr, ConfigError> {
    bind_addr_from_lookup(|key| std::env::var(key).ok())
}

fn bind_addr_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<SocketAddr, ConfigError> {
    let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = lookup(PORT_ENV)
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = format!("{host}:{port}");
    addr.parse()
        .map_err(|_| ConfigError::InvalidBindAddress(addr))
}

/// Whether logs should be emitted as JSON lines.
pub fn json_logs_from_env() -> bool {
    std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
