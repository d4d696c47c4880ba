//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{info, warn};

/// Default upstream location of the cell tower API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/cell-towers";

/// Default per-request timeout for the cell tower API, in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream cell tower API configuration.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output (`MCP_LOG_TIMESTAMPS`).
    pub with_timestamps: bool,
}

/// Configuration for the upstream cell tower API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the tower collection, e.g. `http://localhost:8080/api/cell-towers`.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Static headers sent with every request, in addition to
    /// `Content-Type: application/json`.
    pub headers: BTreeMap<String, String>,
}

/// Custom Debug implementation to redact header values (API keys) from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .headers
            .keys()
            .map(|k| (k.as_str(), "[REDACTED]"))
            .collect();
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("headers", &headers)
            .finish()
    }
}

impl ApiConfig {
    /// API configuration pointing at `base_url`, other settings default.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse a `Name=Value,Name2=Value2` header list.
    ///
    /// Malformed entries (no `=`, empty name) are skipped with a warning.
    pub fn parse_headers(raw: &str) -> BTreeMap<String, String> {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .filter_map(|entry| match entry.split_once('=') {
                Some((name, value)) if !name.trim().is_empty() => {
                    Some((name.trim().to_string(), value.trim().to_string()))
                }
                _ => {
                    warn!("Ignoring malformed header entry in MCP_API_HEADERS");
                    None
                }
            })
            .collect()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            headers: BTreeMap::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "cell-tower-intelligence".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_API_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_API_BASE_URL") {
            config.api.base_url = base_url;
        }
        info!("Cell tower API base URL: {}", config.api.base_url);

        if let Ok(timeout) = std::env::var("MCP_API_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.api.timeout_secs = secs,
                Err(_) => warn!(
                    "Invalid MCP_API_TIMEOUT_SECS '{}', using {}s",
                    timeout, DEFAULT_API_TIMEOUT_SECS
                ),
            }
        }

        if let Ok(headers) = std::env::var("MCP_API_HEADERS") {
            config.api.headers = ApiConfig::parse_headers(&headers);
            info!("Loaded {} static API header(s)", config.api.headers.len());
        }

        config
    }
}

/// `false`, `0`, `no` and `off` (any case) are false; anything else is true.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
