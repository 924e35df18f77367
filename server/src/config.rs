//! Server configuration parsed from environment variables.

use thiserror::Error;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_NAME: &str = "Gulfgate";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Typed server configuration.
///
/// Optional environment variables:
/// - `PORT`: listen port, default 3000
/// - `SITE_NAME`: display name reported by the site metadata endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_name: String,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but does not
    /// parse as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| DEFAULT_SITE_NAME.to_string()),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_string())),
    }
}
