//! Redis revocation store
//!
//! The connection is created on first use and shared by every request
//! afterwards. `ConnectionManager` reconnects on its own after failures.
//! Every round trip is bounded by the configured timeout, and both timeouts
//! and Redis errors surface as `StoreUnavailable`.
//!
//! ## Example
//!
//! ```ignore
//! use hsa_providers::revocation::RedisRevocationStore;
//! use std::time::Duration;
//!
//! let store = RedisRevocationStore::new("redis://localhost:6379", "hsa::", Duration::from_secs(2))?;
//! store.put("jwt::abc", "1000000000", 604_800).await?;
//! ```

use async_trait::async_trait;
use hsa_domain::error::{Error, Result};
use hsa_domain::ports::RevocationStore;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisResult};
use std::future::Future;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::debug;

/// Redis-backed revocation store
pub struct RedisRevocationStore {
    client: Client,
    connection: OnceCell<ConnectionManager>,
    namespace: String,
    timeout: Duration,
}

impl RedisRevocationStore {
    /// Create a store for `connection_string` without connecting
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    /// * `namespace` - Prefix added to every key
    /// * `timeout` - Client timeout for connecting and for each command
    pub fn new(connection_string: &str, namespace: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::open(connection_string)
            .map_err(|e| Error::configuration_with_source("Invalid Redis URL", e))?;

        Ok(Self {
            client,
            connection: OnceCell::new(),
            namespace: namespace.into(),
            timeout,
        })
    }

    /// Key as stored in Redis
    pub fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.namespace, key)
    }

    /// Shared connection, established on first call
    async fn connection(&self) -> Result<ConnectionManager> {
        let manager = tokio::time::timeout(
            self.timeout,
            self.connection.get_or_try_init(|| async {
                debug!("Opening Redis connection");
                ConnectionManager::new(self.client.clone()).await
            }),
        )
        .await
        .map_err(|_| Error::store_unavailable("Timed out connecting to Redis"))?
        .map_err(|e| Error::store_unavailable_with_source("Failed to connect to Redis", e))?;

        Ok(manager.clone())
    }

    /// Run one command under the client timeout
    async fn round_trip<T>(
        &self,
        command: &str,
        fut: impl Future<Output = RedisResult<T>>,
    ) -> Result<T> {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| Error::store_unavailable(format!("Redis {command} timed out")))?
            .map_err(|e| Error::store_unavailable_with_source(format!("Redis {command} failed"), e))
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn put(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let mut conn = self.connection().await?;
        let key = self.namespaced(key);
        // SET EX rejects a zero expiry
        let ttl = ttl_secs.max(1);
        self.round_trip("SET", conn.set_ex::<_, _, ()>(&key, value, ttl))
            .await
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        let key = self.namespaced(key);
        self.round_trip("GET", conn.get::<_, Option<String>>(&key))
            .await
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let key = self.namespaced(key);
        self.round_trip("EXISTS", conn.exists::<_, bool>(&key))
            .await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let key = self.namespaced(key);
        let removed: i64 = self.round_trip("DEL", conn.del(&key)).await?;
        Ok(removed > 0)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisRevocationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisRevocationStore")
            .field("namespace", &self.namespace)
            .field("timeout", &self.timeout)
            .field("connected", &self.connection.initialized())
            .finish()
    }
}
