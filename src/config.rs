//! Service configuration.
//!
//! An optional TOML file (`celestial.toml` by default) with serde-provided
//! defaults for every field, so an empty or missing file yields a working
//! configuration. `HOST`/`PORT` environment variables override the bind
//! address at startup.

use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::engine::SearchConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid bind address `{0}`")]
    BindAddress(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "AppConfig::default_host")]
    pub host: String,
    #[serde(default = "AppConfig::default_port")]
    pub port: u16,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            search: SearchConfig::default(),
        }
    }
}

impl AppConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

    /// Load from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Apply `HOST`/`PORT` environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("HOST") {
            self.host = host;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.port = port;
        }
        self
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::BindAddress(raw))
    }
}
