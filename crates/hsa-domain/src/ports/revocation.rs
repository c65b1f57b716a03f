//! Revocation Store Port
//!
//! Key-value storage with per-entry expiry. A token identifier that is
//! absent from the store counts as revoked, so callers must never read a
//! failed lookup as "not revoked".

use crate::error::Result;
use async_trait::async_trait;

/// Revocation store backend
///
/// Every key passed in is namespaced by the implementation under its global
/// prefix before it reaches storage.
///
/// # Errors
///
/// Connection failures and timeouts return `Error::StoreUnavailable`.
#[async_trait]
pub trait RevocationStore: Send + Sync + std::fmt::Debug {
    /// Store `value` under `key`, expiring after `ttl_secs`
    async fn put(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()>;

    /// Value under `key`, `None` if absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Whether `key` is present and unexpired
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Remove `key`; true if something was deleted
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Backend name for logs
    fn provider_name(&self) -> &str;
}
