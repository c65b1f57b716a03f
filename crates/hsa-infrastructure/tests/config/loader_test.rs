//! Configuration Loader Tests
//!
//! Each test runs inside a `figment::Jail`, which isolates the working
//! directory and environment variables.

use figment::Jail;
use hsa_infrastructure::config::{AppConfig, ConfigLoader, StoreBackend};
use hsa_infrastructure::constants::{DEFAULT_HTTP_PORT, DEFAULT_LOG_LEVEL};
use tempfile::TempDir;

fn load() -> Result<AppConfig, figment::Error> {
    ConfigLoader::new()
        .load()
        .map_err(|e| figment::Error::from(e.to_string()))
}

#[test]
fn test_defaults_with_memory_store() {
    Jail::expect_with(|jail| {
        jail.set_env("HSA__STORE__BACKEND", "memory");

        let config = load()?;
        assert_eq!(config.server.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.auth.jwt.expiration_secs, 604_800);
        assert_eq!(config.auth.jwt.clock_tolerance_secs, 5);
        assert_eq!(config.auth.jwt.jti_prefix, "jwt::");
        assert_eq!(config.auth.cookies.token_name, "token");
        assert!(config.auth.keys.current_secret.is_none());
        Ok(())
    });
}

#[test]
fn test_toml_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "hsa.toml",
            r#"
                [server]
                port = 8088
                base_url = "https://auth.example.com"

                [auth.jwt]
                issuer = "https://auth.example.com"
                audience = "example"

                [store]
                backend = "memory"

                [gate]
                protected = ["/dash", "/dash/*"]
            "#,
        )?;

        let config = load()?;
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.auth.jwt.audience, "example");
        assert!(config.gate.is_protected("/dash/home"));
        assert!(!config.gate.is_protected("/app"));
        assert_eq!(
            config.gate_policy().base_url.as_deref(),
            Some("https://auth.example.com")
        );
        Ok(())
    });
}

#[test]
fn test_prefixed_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "hsa.toml",
            r#"
                [server]
                port = 8088

                [store]
                backend = "memory"
            "#,
        )?;
        jail.set_env("HSA__SERVER__PORT", "9099");
        jail.set_env("HSA__AUTH__JWT__AUDIENCE", "from-env");

        let config = load()?;
        assert_eq!(config.server.port, 9099);
        assert_eq!(config.auth.jwt.audience, "from-env");
        Ok(())
    });
}

#[test]
fn test_well_known_env_vars() {
    Jail::expect_with(|jail| {
        jail.set_env("JWT_CURRENT_SECRET", "c2VjcmV0LXNlY3JldC1zZWNyZXQtc2VjcmV0LXNlY3JldA");
        jail.set_env("JWT_CURRENT_KID", "2024-06");
        jail.set_env("REDIS_URL", "redis://127.0.0.1:6379/2");

        let config = load()?;
        assert_eq!(
            config.auth.keys.current_secret.as_deref(),
            Some("c2VjcmV0LXNlY3JldC1zZWNyZXQtc2VjcmV0LXNlY3JldA")
        );
        assert_eq!(config.auth.keys.current_kid.as_deref(), Some("2024-06"));
        assert_eq!(config.store.backend, StoreBackend::Redis);
        assert_eq!(config.store.url.as_deref(), Some("redis://127.0.0.1:6379/2"));
        Ok(())
    });
}

#[test]
fn test_secret_is_redacted_in_debug() {
    Jail::expect_with(|jail| {
        jail.set_env("HSA__STORE__BACKEND", "memory");
        jail.set_env("JWT_CURRENT_SECRET", "c2VjcmV0LXNlY3JldC1zZWNyZXQtc2VjcmV0LXNlY3JldA");

        let config = load()?;
        let rendered = format!("{:?}", config.auth.keys);
        assert!(!rendered.contains("c2VjcmV0"));
        assert!(rendered.contains("<redacted>"));
        Ok(())
    });
}

#[test]
fn test_save_and_reload() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("saved.toml");

    let mut original = AppConfig::default();
    original.server.port = 9999;
    original.store.backend = StoreBackend::Memory;

    let loader = ConfigLoader::new().with_config_path(&config_path);
    loader.save_to_file(&original, &config_path).expect("save");
    let loaded = loader.load().expect("load");

    assert_eq!(loaded.server.port, 9999);
    assert_eq!(loaded.store.backend, StoreBackend::Memory);
    assert_eq!(loader.config_path(), Some(config_path.as_path()));
}

#[test]
fn test_extract_skips_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("hsa.toml", "[auth.password]\nmemory_kib = 1024\n")?;

        // Redis with no URL would fail validation
        let config = ConfigLoader::new()
            .extract()
            .map_err(|e| figment::Error::from(e.to_string()))?;
        assert_eq!(config.store.backend, StoreBackend::Redis);
        assert_eq!(config.auth.password.memory_kib, 1024);
        Ok(())
    });
}
