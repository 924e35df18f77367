//! Shared application state.

use std::sync::Arc;

use crate::config::ServerConfig;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Cloneable handle to server-wide state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}
