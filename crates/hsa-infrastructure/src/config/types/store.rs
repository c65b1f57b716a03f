//! Revocation store configuration types

use crate::constants::{STORE_DEFAULT_NAMESPACE, STORE_DEFAULT_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Revocation store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Shared Redis instance
    #[default]
    Redis,
    /// Process-local map, single node only
    Memory,
}

/// Revocation store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend to use
    pub backend: StoreBackend,
    /// Connection URL (`redis://host:port/db`), required for Redis
    pub url: Option<String>,
    /// Global prefix for every key
    pub namespace: String,
    /// Client timeout per round trip in milliseconds
    pub timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Redis,
            url: None,
            namespace: STORE_DEFAULT_NAMESPACE.to_string(),
            timeout_ms: STORE_DEFAULT_TIMEOUT_MS,
        }
    }
}

impl StoreConfig {
    /// Round trip timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
