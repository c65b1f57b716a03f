//! Main application configuration

use super::{AuthConfig, LoggingConfig, ServerConfig, StoreConfig};
use hsa_domain::value_objects::GatePolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User directory configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersConfig {
    /// JSON file with an array of user records; the demo account when unset
    pub path: Option<PathBuf>,
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server
    pub server: ServerConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Tokens, keys, cookies and password hashing
    pub auth: AuthConfig,
    /// Request gate path policy
    pub gate: GatePolicy,
    /// Revocation store backend
    pub store: StoreConfig,
    /// User directory
    pub users: UsersConfig,
}

impl AppConfig {
    /// Gate policy with the server origin filled in when the gate has none
    pub fn gate_policy(&self) -> GatePolicy {
        let mut policy = self.gate.clone();
        if policy.base_url.is_none() {
            policy.base_url.clone_from(&self.server.base_url);
        }
        policy
    }
}
