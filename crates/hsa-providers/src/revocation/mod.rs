//! Revocation Store Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`RedisRevocationStore`] | Distributed | Shared across every server instance |
//! | [`InMemoryRevocationStore`] | Local | Single node and tests |
//!
//! Both apply a global key prefix and honour per-entry TTLs.

#[cfg(feature = "store-memory")]
pub mod memory;
#[cfg(feature = "store-redis")]
pub mod redis;

#[cfg(feature = "store-memory")]
pub use memory::InMemoryRevocationStore;
#[cfg(feature = "store-redis")]
pub use redis::RedisRevocationStore;
