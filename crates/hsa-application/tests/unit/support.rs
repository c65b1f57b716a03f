//! Shared fixtures: a pinned clock, real HS512 tokens and an in-memory
//! revocation store

use async_trait::async_trait;
use hsa_application::{SessionManager, StructuralVerifier};
use hsa_domain::entities::PublicUser;
use hsa_domain::error::{Error, Result};
use hsa_domain::ports::{Clock, KeyProvider, RevocationStore, TokenService};
use hsa_domain::value_objects::{
    CookieSettings, RevocationNamespace, SigningAlgorithm, SigningKey,
};
use hsa_infrastructure::ManualClock;
use hsa_infrastructure::config::JwtConfig;
use hsa_infrastructure::crypto::{JwtTokenService, StaticKeyProvider};
use hsa_providers::revocation::InMemoryRevocationStore;
use std::sync::Arc;

pub const START: u64 = 1_700_000_000;
pub const TTL: u64 = 600;
pub const TOLERANCE: u64 = 5;

pub struct Harness {
    pub clock: Arc<ManualClock>,
    pub tokens: Arc<JwtTokenService>,
    pub store: Arc<InMemoryRevocationStore>,
    pub namespace: RevocationNamespace,
    pub cookies: CookieSettings,
}

impl Harness {
    pub fn new() -> Self {
        let key = SigningKey::new(vec![7u8; 64], "test-kid", SigningAlgorithm::Hs512);
        Self::with_keys(StaticKeyProvider::new(key))
    }

    pub fn with_keys(keys: impl KeyProvider + 'static) -> Self {
        let clock = Arc::new(ManualClock::new(START));
        let config = JwtConfig {
            expiration_secs: TTL,
            clock_tolerance_secs: TOLERANCE,
            ..JwtConfig::default()
        };
        let tokens = Arc::new(JwtTokenService::new(
            &config,
            Arc::new(keys),
            Arc::clone(&clock) as Arc<dyn Clock>,
        ));
        let store = Arc::new(InMemoryRevocationStore::new(
            "test::",
            Arc::clone(&clock) as Arc<dyn Clock>,
        ));

        Self {
            clock,
            tokens,
            store,
            namespace: RevocationNamespace::new(config.jti_prefix),
            cookies: CookieSettings::default(),
        }
    }

    pub fn token_service(&self) -> Arc<dyn TokenService> {
        Arc::clone(&self.tokens) as Arc<dyn TokenService>
    }

    pub fn sessions(&self) -> SessionManager {
        self.sessions_with_store(Arc::clone(&self.store) as Arc<dyn RevocationStore>)
    }

    pub fn sessions_with_store(&self, store: Arc<dyn RevocationStore>) -> SessionManager {
        SessionManager::new(
            self.token_service(),
            store,
            self.cookies.clone(),
            self.namespace.clone(),
        )
    }

    pub fn structural(&self) -> StructuralVerifier {
        StructuralVerifier::new(self.token_service())
    }
}

pub fn john() -> PublicUser {
    PublicUser {
        id: "1000000000".to_string(),
        email: "john@example.com".to_string(),
        name: "John Doe".to_string(),
        role: None,
    }
}

pub fn admin() -> PublicUser {
    PublicUser {
        id: "1000000001".to_string(),
        email: "admin@example.com".to_string(),
        name: "Ada Admin".to_string(),
        role: Some("admin".to_string()),
    }
}

/// A store whose backend is always down
#[derive(Debug, Default)]
pub struct UnavailableStore;

#[async_trait]
impl RevocationStore for UnavailableStore {
    async fn put(&self, _key: &str, _value: &str, _ttl_secs: u64) -> Result<()> {
        Err(Error::store_unavailable("connection refused"))
    }

    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::store_unavailable("connection refused"))
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Err(Error::store_unavailable("connection refused"))
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Err(Error::store_unavailable("connection refused"))
    }

    fn provider_name(&self) -> &str {
        "unavailable"
    }
}
