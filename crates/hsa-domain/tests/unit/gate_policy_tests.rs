//! Unit tests for the request gate path policy

use hsa_domain::value_objects::{GatePolicy, PathPattern, RoleRule};

#[test]
fn test_policy_deserializes_from_partial_config() {
    let policy: GatePolicy = serde_json::from_str(
        r#"{"protected":["/dash","/dash/*"],"role_rules":[{"pattern":"/dash/ops/*","role":"ops"}]}"#,
    )
    .expect("deserialization should succeed");

    assert!(policy.is_protected("/dash/home"));
    assert!(!policy.is_protected("/app"));
    assert_eq!(policy.required_role("/dash/ops/queue"), Some("ops"));
    assert_eq!(policy.login_path, "/login");
    assert_eq!(policy.current_path_header, "x-current-path");
}

#[test]
fn test_first_role_rule_wins() {
    let mut policy = GatePolicy::default();
    policy.role_rules.insert(0, RoleRule::new("/admin/reports/*", "auditor"));

    assert_eq!(policy.required_role("/admin/reports/q3"), Some("auditor"));
    assert_eq!(policy.required_role("/admin/users"), Some("admin"));
}

#[test]
fn test_api_prefix() {
    let policy = GatePolicy::default();
    assert!(policy.is_api_path("/api/admin/users"));
    assert!(!policy.is_api_path("/admin/users"));
    assert!(!policy.is_api_path("/apiary"));
}

#[test]
fn test_root_wildcard_matches_everything() {
    let pattern = PathPattern::new("/*");
    assert!(pattern.matches("/"));
    assert!(pattern.matches("/anything/at/all"));
}

#[test]
fn test_relative_paths_are_rejected() {
    let policy = GatePolicy {
        access_denied_path: "access-denied".to_string(),
        ..GatePolicy::default()
    };
    assert!(policy.validate().is_err());
}
