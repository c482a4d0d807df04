//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Path every account route is mounted under
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Handler timeout in seconds
    #[serde(default = "default_handler_timeout")]
    pub handler_timeout: u64,

    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0,
            base_url: default_base_url(),
            handler_timeout: default_handler_timeout(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_env("SERVER_PORT").unwrap_or(defaults.port),
            workers: parse_env("SERVER_WORKERS").unwrap_or(defaults.workers),
            base_url: std::env::var("ACCOUNT_API_URL").unwrap_or(defaults.base_url),
            handler_timeout: parse_env("HANDLER_TIMEOUT").unwrap_or(defaults.handler_timeout),
            max_body_bytes: parse_env("MAX_BODY_BYTES").unwrap_or(defaults.max_body_bytes),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Handler timeout as a duration
    pub fn handler_timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.handler_timeout)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn default_base_url() -> String {
    String::from("/api/account")
}

fn default_handler_timeout() -> u64 {
    5
}

fn default_max_body_bytes() -> usize {
    4 * 1024 * 1024 // 4 MB
}
