// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::{Authenticator, TokenResolver};
use crate::config::TokenServiceConfig;

#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<Authenticator>,
}

impl AppState {
    pub fn new(authenticator: Authenticator) -> Self {
        Self {
            authenticator: Arc::new(authenticator),
        }
    }

    pub fn from_config(config: TokenServiceConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(Authenticator::new(TokenResolver::new(config)?)))
    }
}
