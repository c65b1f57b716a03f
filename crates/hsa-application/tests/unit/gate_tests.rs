//! Request gate decision table

use crate::support::{Harness, TOLERANCE, TTL, admin, john};
use hsa_application::{DenyStatus, GateDecision, GateOutcome, GateRequest, RequestGate};
use hsa_domain::ports::TokenService;
use hsa_domain::value_objects::{GatePolicy, SubjectClaims};

fn gate(h: &Harness) -> RequestGate {
    RequestGate::new(h.structural(), GatePolicy::default())
}

fn token_for(h: &Harness, user: &hsa_domain::entities::PublicUser) -> String {
    h.tokens.issue(&SubjectClaims::from(user)).expect("issue").token
}

fn evaluate(gate: &RequestGate, path: &str, query: Option<&str>, token: Option<&str>) -> GateDecision {
    gate.evaluate(&GateRequest { path, query, token })
}

#[test]
fn test_unprotected_path_is_admitted() {
    let h = Harness::new();
    let decision = evaluate(&gate(&h), "/", None, Some("garbage"));

    assert_eq!(decision.outcome, GateOutcome::Admitted { claims: None });
    assert!(!decision.clear_session);
}

#[test]
fn test_page_without_token_redirects_with_return_target() {
    let h = Harness::new();
    let decision = evaluate(&gate(&h), "/app/reports", Some("year=2024"), None);

    assert_eq!(
        decision.outcome,
        GateOutcome::RedirectToLogin {
            return_to: "/app/reports?year=2024".to_string()
        }
    );
    assert!(decision.clear_session);
}

#[test]
fn test_api_without_token_is_unauthorized() {
    let h = Harness::new();
    let decision = evaluate(&gate(&h), "/api/admin/users", None, None);

    assert_eq!(decision.outcome, GateOutcome::Denied(DenyStatus::Unauthorized));
    assert!(decision.clear_session);
    assert_eq!(DenyStatus::Unauthorized.code(), 401);
}

#[test]
fn test_invalid_token_clears_pair() {
    let h = Harness::new();
    let decision = evaluate(&gate(&h), "/app", None, Some("not.a.jwt"));

    assert!(matches!(decision.outcome, GateOutcome::RedirectToLogin { .. }));
    assert!(decision.clear_session);
}

#[test]
fn test_expired_token_is_rejected() {
    let h = Harness::new();
    let token = token_for(&h, &john());
    h.clock.advance(TTL + TOLERANCE + 1);

    let decision = evaluate(&gate(&h), "/app", None, Some(&token));
    assert!(matches!(decision.outcome, GateOutcome::RedirectToLogin { .. }));
    assert!(decision.clear_session);
}

#[test]
fn test_valid_token_is_admitted_with_claims() {
    let h = Harness::new();
    let token = token_for(&h, &john());

    let decision = evaluate(&gate(&h), "/app", None, Some(&token));
    match decision.outcome {
        GateOutcome::Admitted { claims: Some(claims) } => assert_eq!(claims.sub, "1000000000"),
        other => panic!("expected admission, got {other:?}"),
    }
    assert!(!decision.clear_session);
}

#[test]
fn test_missing_role_on_page_redirects_to_access_denied() {
    let h = Harness::new();
    let token = token_for(&h, &john());

    let decision = evaluate(&gate(&h), "/admin", None, Some(&token));
    assert_eq!(decision.outcome, GateOutcome::RedirectToAccessDenied);
    assert!(!decision.clear_session);
}

#[test]
fn test_missing_role_on_api_is_forbidden() {
    let h = Harness::new();
    let token = token_for(&h, &john());

    let decision = evaluate(&gate(&h), "/api/admin/keys", None, Some(&token));
    assert_eq!(decision.outcome, GateOutcome::Denied(DenyStatus::Forbidden));
    assert!(!decision.clear_session);
    assert_eq!(DenyStatus::Forbidden.message(), "Forbidden");
}

#[test]
fn test_admin_role_is_admitted() {
    let h = Harness::new();
    let token = token_for(&h, &admin());

    let decision = evaluate(&gate(&h), "/admin/users", None, Some(&token));
    assert!(matches!(decision.outcome, GateOutcome::Admitted { claims: Some(_) }));
}

#[test]
fn test_login_page_with_valid_token_goes_to_app() {
    let h = Harness::new();
    let token = token_for(&h, &john());

    let decision = evaluate(&gate(&h), "/login", None, Some(&token));
    assert_eq!(decision.outcome, GateOutcome::RedirectToApp);
    assert!(!decision.clear_session);

    let decision = evaluate(&gate(&h), "/login/", None, Some(&token));
    assert_eq!(decision.outcome, GateOutcome::RedirectToApp);
}

#[test]
fn test_login_page_with_invalid_token_renders_and_clears() {
    let h = Harness::new();

    let decision = evaluate(&gate(&h), "/login", None, Some("stale"));
    assert_eq!(decision.outcome, GateOutcome::Admitted { claims: None });
    assert!(decision.clear_session);

    let decision = evaluate(&gate(&h), "/login", None, None);
    assert_eq!(decision.outcome, GateOutcome::Admitted { claims: None });
    assert!(!decision.clear_session);
}

#[tokio::test]
async fn test_revoked_token_still_passes_gate() {
    let h = Harness::new();
    let sessions = h.sessions();
    let mut jar = hsa_application::MemoryCookieJar::new();
    let claims = sessions.login(&john(), &mut jar).await.expect("login");
    let token = jar.written("token").expect("token").value.clone();
    sessions.revoke(&claims.jti).await.expect("revoke");

    let decision = evaluate(&gate(&h), "/app", None, Some(&token));
    assert!(matches!(decision.outcome, GateOutcome::Admitted { claims: Some(_) }));
}
