//! Configuration loader
//!
//! Sources are merged in this order (later sources override earlier):
//! 1. Default values from `AppConfig::default()`
//! 2. TOML configuration file (explicit path, or the first `hsa.toml` found)
//! 3. Environment variables with prefix (e.g. `HSA__SERVER__PORT`)
//! 4. The well-known raw variables `JWT_CURRENT_SECRET`, `JWT_CURRENT_KID`
//!    and `REDIS_URL`

use crate::config::{AppConfig, StoreBackend};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    JWT_CURRENT_KID_ENV, JWT_CURRENT_SECRET_ENV, REDIS_URL_ENV,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use hsa_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load and validate configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        let app_config = self.extract()?;
        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Merge every source without validating the result
    ///
    /// For tooling that only reads part of the configuration, such as
    /// password hashing.
    pub fn extract(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        let prefix = format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR);
        figment = figment
            .merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR))
            .merge(Self::well_known_env());

        figment
            .extract()
            .config_context("Failed to extract configuration")
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Variables deployments set without the prefix
    fn well_known_env() -> Env {
        Env::raw()
            .only(&[JWT_CURRENT_SECRET_ENV, JWT_CURRENT_KID_ENV, REDIS_URL_ENV])
            .map(|key| {
                if key.as_str().eq_ignore_ascii_case(JWT_CURRENT_SECRET_ENV) {
                    "auth.keys.current_secret".into()
                } else if key.as_str().eq_ignore_ascii_case(JWT_CURRENT_KID_ENV) {
                    "auth.keys.current_kid".into()
                } else {
                    "store.url".into()
                }
            })
    }

    /// First existing config file among the usual locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Missing key material is not checked here; the key provider reports it
/// when the server starts.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_jwt_config(config)?;
    validate_store_config(config)?;
    config.gate.validate().map_err(Error::configuration)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_jwt_config(config: &AppConfig) -> Result<()> {
    let jwt = &config.auth.jwt;
    if jwt.issuer.trim().is_empty() {
        return Err(Error::configuration("JWT issuer cannot be empty"));
    }
    if jwt.audience.trim().is_empty() {
        return Err(Error::configuration("JWT audience cannot be empty"));
    }
    if jwt.expiration_secs == 0 {
        return Err(Error::configuration("JWT expiration cannot be 0"));
    }
    Ok(())
}

fn validate_store_config(config: &AppConfig) -> Result<()> {
    if config.store.backend == StoreBackend::Redis
        && config.store.url.as_deref().is_none_or(str::is_empty)
    {
        return Err(Error::configuration(format!(
            "Redis backend requires store.url (or {REDIS_URL_ENV})"
        )));
    }
    if config.store.timeout_ms == 0 {
        return Err(Error::configuration("Store timeout cannot be 0"));
    }
    Ok(())
}
