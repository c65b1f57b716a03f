//! Redis revocation store tests
//!
//! No live server is needed: these cover construction, key naming and the
//! behaviour when Redis cannot be reached.

use hsa_domain::ports::RevocationStore;
use hsa_providers::revocation::RedisRevocationStore;
use std::time::Duration;

#[test]
fn test_invalid_url_is_configuration_error() {
    let result = RedisRevocationStore::new("not a url", "hsa::", Duration::from_secs(1));
    assert!(matches!(
        result,
        Err(hsa_domain::Error::Configuration { .. })
    ));
}

#[test]
fn test_keys_are_namespaced() {
    let store = RedisRevocationStore::new("redis://127.0.0.1:6379", "hsa::", Duration::from_secs(1))
        .expect("client");
    assert_eq!(store.namespaced("jwt::abc"), "hsa::jwt::abc");
    assert_eq!(store.provider_name(), "redis");
}

#[tokio::test]
async fn test_unreachable_server_is_unavailable_not_revoked() {
    // Port 1 is reserved and refuses connections
    let store = RedisRevocationStore::new("redis://127.0.0.1:1", "hsa::", Duration::from_millis(200))
        .expect("client");

    let err = store.exists("jwt::abc").await.expect_err("unreachable");
    assert!(err.is_store_unavailable());

    let err = store.put("jwt::abc", "u", 60).await.expect_err("unreachable");
    assert!(err.is_store_unavailable());
}
