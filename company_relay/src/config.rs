//! Layered server configuration: defaults, an optional TOML file, then
//! `RELAY_*` environment variables. Command-line flags are applied on top by
//! the binary.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use company_relay_lib::truproxy_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Origin of the local front-end dev server.
pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Socket address the HTTP server listens on.
    pub bind_addr: String,
    /// Base URL of the registry's company endpoints.
    pub upstream_base_url: String,
    /// Timeout for each outbound registry call, in seconds.
    pub request_timeout_secs: u64,
    pub cors: CorsConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the relay. `*` allows any origin.
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            upstream_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_ORIGIN.to_string()],
            allow_credentials: true,
        }
    }
}

impl RelayConfig {
    /// Reads a TOML file. Keys missing from the file keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Overrides fields from `RELAY_*` process environment variables.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Overrides fields from a variable lookup.
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("RELAY_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(url) = lookup("RELAY_UPSTREAM_BASE_URL") {
            self.upstream_base_url = url;
        }
        if let Some(raw) = lookup("RELAY_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_timeout("RELAY_REQUEST_TIMEOUT_SECS", &raw)?;
        }
        if let Some(raw) = lookup("RELAY_CORS_ORIGINS") {
            self.cors.allowed_origins = raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_timeout(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
        }),
    }
}
