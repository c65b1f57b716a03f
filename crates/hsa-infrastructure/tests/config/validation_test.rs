//! Configuration validation tests

use hsa_infrastructure::config::loader::validate_app_config;
use hsa_infrastructure::config::{AppConfig, StoreBackend};

fn memory_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.store.backend = StoreBackend::Memory;
    config
}

#[test]
fn test_memory_defaults_are_valid() {
    assert!(validate_app_config(&memory_config()).is_ok());
}

#[test]
fn test_redis_requires_url() {
    let mut config = AppConfig::default();
    assert!(validate_app_config(&config).is_err());

    config.store.url = Some("redis://localhost".to_string());
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_rejects_zero_port() {
    let mut config = memory_config();
    config.server.port = 0;
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_rejects_empty_issuer_and_audience() {
    let mut config = memory_config();
    config.auth.jwt.issuer = " ".to_string();
    assert!(validate_app_config(&config).is_err());

    let mut config = memory_config();
    config.auth.jwt.audience = String::new();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_rejects_zero_expiry() {
    let mut config = memory_config();
    config.auth.jwt.expiration_secs = 0;
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_rejects_protected_login_page() {
    let mut config = memory_config();
    config.gate.exclusions.clear();
    config.gate.protected.push("/login".into());
    let err = validate_app_config(&config).expect_err("invalid gate");
    assert!(err.to_string().contains("login_path"));
}

#[test]
fn test_rejects_unknown_log_level() {
    let mut config = memory_config();
    config.logging.level = "verbose".to_string();
    assert!(validate_app_config(&config).is_err());
}
