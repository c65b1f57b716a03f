//! Server configuration types

use crate::constants::{DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Public origin used for absolute redirects (e.g. `https://example.com`)
    pub base_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            base_url: None,
        }
    }
}

impl ServerConfig {
    /// Parsed bind address
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
