//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{parse_or, EnvLookup};

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

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
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: DEFAULT_PORT,
            workers: 0, // Use all CPU cores
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

    /// Load from `SERVER_HOST`, `PORT` (or `SERVER_PORT`) and `SERVER_WORKERS`
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        let defaults = Self::default();
        let port = lookup("PORT")
            .or_else(|| lookup("SERVER_PORT"))
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.port);

        Self {
            host: lookup("SERVER_HOST").unwrap_or(defaults.host),
            port,
            workers: parse_or(lookup, "SERVER_WORKERS", defaults.workers),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
