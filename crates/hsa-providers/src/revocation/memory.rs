//! In-memory revocation store
//!
//! Process-local, so revocations are not shared between instances. Meant
//! for single-node deployments and tests.

use async_trait::async_trait;
use dashmap::DashMap;
use hsa_domain::error::Result;
use hsa_domain::ports::{Clock, RevocationStore};
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: u64,
}

/// DashMap-backed revocation store with per-entry expiry
#[derive(Debug)]
pub struct InMemoryRevocationStore {
    entries: DashMap<String, Entry>,
    namespace: String,
    clock: Arc<dyn Clock>,
}

impl InMemoryRevocationStore {
    /// Create an empty store
    pub fn new(namespace: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            namespace: namespace.into(),
            clock,
        }
    }

    /// Key as stored in the map
    pub fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.namespace, key)
    }

    /// Number of stored entries, expired ones included until purged
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every expired entry
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_secs();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        before - self.entries.len()
    }

    fn live(&self, key: &str) -> Option<String> {
        let now = self.clock.now_secs();
        let namespaced = self.namespaced(key);
        let value = self
            .entries
            .get(&namespaced)
            .map(|entry| (entry.expires_at > now).then(|| entry.value.clone()))?;
        if value.is_none() {
            self.entries.remove_if(&namespaced, |_, entry| entry.expires_at <= now);
        }
        value
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn put(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let expires_at = self.clock.now_secs().saturating_add(ttl_secs);
        self.entries.insert(
            self.namespaced(key),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.live(key))
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.live(key).is_some())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(&self.namespaced(key)).is_some())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
