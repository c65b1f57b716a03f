//! Server Initialization
//!
//! Configuration loading, adapter construction from configuration, and
//! the HTTP listener with graceful shutdown. Also hosts the provisioning
//! helpers behind the `generate-secret` and `hash-password` commands.
//!
//! Missing key material is fatal here: the key provider is asked for the
//! signing key before the listener binds.

use crate::builder::AppStateBuilder;
use crate::router::build_router;
use crate::state::AppState;
use hsa_domain::ports::{
    Clock, KeyProvider, PasswordVerifier, RevocationStore, TokenService, UserDirectory,
};
use hsa_domain::value_objects::RevocationNamespace;
use hsa_infrastructure::SystemClock;
use hsa_infrastructure::config::{AppConfig, ConfigLoader, StoreBackend};
use hsa_infrastructure::constants::{GENERATED_KID_BYTES, GENERATED_SECRET_BYTES};
use hsa_infrastructure::crypto::{
    Argon2PasswordVerifier, JwtTokenService, StaticKeyProvider, TokenGenerator,
};
use hsa_providers::revocation::{InMemoryRevocationStore, RedisRevocationStore};
use hsa_providers::users::InMemoryUserDirectory;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Run the HTTP server until interrupted
pub async fn run_server(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    hsa_infrastructure::logging::init_logging(&config.logging)?;

    let state = build_state(&config).await?;
    let addr = config.server.socket_addr()?;

    info!(
        %addr,
        store = ?config.store.backend,
        issuer = %config.auth.jwt.issuer,
        "Starting Hybrid Session Auth server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Load configuration from optional path
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Construct every adapter named by `config` and wire the state
///
/// # Errors
/// Missing or undecodable key material, an unusable Redis URL, an
/// unreadable user file, or invalid Argon2 parameters.
pub async fn build_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let keys = StaticKeyProvider::from_config(&config.auth.keys)?;
    let signing = keys.current_key()?;
    info!(kid = signing.key_id(), algorithm = %signing.algorithm(), "Signing key loaded");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
        &config.auth.jwt,
        Arc::new(keys),
        Arc::clone(&clock),
    ));

    let store = revocation_store(config, clock)?;
    info!(provider = store.provider_name(), "Revocation store configured");

    let users: Arc<dyn UserDirectory> = match &config.users.path {
        Some(path) => Arc::new(InMemoryUserDirectory::load(path).await?),
        None => {
            warn!("No user directory configured, serving the built-in demo account");
            Arc::new(InMemoryUserDirectory::demo())
        }
    };

    let passwords: Arc<dyn PasswordVerifier> =
        Arc::new(Argon2PasswordVerifier::new(&config.auth.password)?);

    Ok(AppStateBuilder::new()
        .with_token_service(tokens)
        .with_revocation_store(store)
        .with_user_directory(users)
        .with_password_verifier(passwords)
        .with_cookie_settings(config.auth.cookies.clone())
        .with_gate_policy(config.gate_policy())
        .with_revocation_namespace(RevocationNamespace::new(config.auth.jwt.jti_prefix.clone()))
        .try_build()?)
}

fn revocation_store(
    config: &AppConfig,
    clock: Arc<dyn Clock>,
) -> Result<Arc<dyn RevocationStore>, Box<dyn std::error::Error>> {
    let store = &config.store;
    match store.backend {
        StoreBackend::Redis => {
            let url = store
                .url
                .as_deref()
                .ok_or("store.url is required for the redis backend")?;
            Ok(Arc::new(RedisRevocationStore::new(
                url,
                store.namespace.clone(),
                store.timeout(),
            )?))
        }
        StoreBackend::Memory => {
            warn!("In-memory revocation store: sessions are local to this process");
            Ok(Arc::new(InMemoryRevocationStore::new(
                store.namespace.clone(),
                clock,
            )))
        }
    }
}

/// A fresh HS512 secret (standard base64) and key identifier
pub fn generate_secret() -> (String, String) {
    (
        TokenGenerator::generate_secret(GENERATED_SECRET_BYTES),
        TokenGenerator::generate_url_safe_token(GENERATED_KID_BYTES),
    )
}

/// Argon2id PHC hash of `plain` with the configured parameters
pub fn hash_password(
    config_path: Option<&Path>,
    plain: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    // Only the Argon2 parameters matter here, so skip validation
    let config = loader.extract()?;
    let hasher = Argon2PasswordVerifier::new(&config.auth.password)?;
    Ok(hasher.hash_password(plain.trim())?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
