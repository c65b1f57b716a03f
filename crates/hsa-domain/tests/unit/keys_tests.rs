//! Unit tests for signing key value objects

use hsa_domain::value_objects::{SigningAlgorithm, SigningKey};

#[test]
fn test_algorithm_name() {
    assert_eq!(SigningAlgorithm::Hs512.as_str(), "HS512");
    assert_eq!(SigningAlgorithm::Hs512.to_string(), "HS512");
    assert_eq!(SigningAlgorithm::default(), SigningAlgorithm::Hs512);
}

#[test]
fn test_debug_hides_material() {
    let key = SigningKey::new(vec![0xAB; 64], "2024-01", SigningAlgorithm::Hs512);
    let rendered = format!("{key:?}");

    assert!(rendered.contains("2024-01"));
    assert!(rendered.contains("<64 bytes>"));
    assert!(!rendered.contains("171"));
    assert_eq!(key.material().len(), 64);
}
