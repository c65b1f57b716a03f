//! Session manager: login, logout and validated session

use crate::support::{Harness, TOLERANCE, TTL, UnavailableStore, john};
use hsa_application::{MemoryCookieJar, SessionStatus};
use hsa_domain::entities::PublicUser;
use hsa_domain::error::Error;
use hsa_domain::ports::{RevocationStore, SessionCookieStore};
use hsa_domain::value_objects::{SameSitePolicy, SigningAlgorithm, SigningKey};
use hsa_infrastructure::crypto::StaticKeyProvider;
use std::sync::Arc;

#[tokio::test]
async fn test_login_sets_cookie_pair_and_registers_identifier() {
    let h = Harness::new();
    let sessions = h.sessions();
    let mut jar = MemoryCookieJar::new();

    let claims = sessions.login(&john(), &mut jar).await.expect("login");

    let token = jar.written("token").expect("token cookie");
    assert!(token.http_only);
    assert!(token.secure);
    assert_eq!(token.same_site, SameSitePolicy::Strict);
    assert_eq!(token.max_age_secs, TTL);

    let profile = jar.written("user_data").expect("profile cookie");
    assert!(!profile.http_only);
    assert_eq!(profile.max_age_secs, TTL);
    let user: PublicUser = serde_json::from_str(&profile.value).expect("json profile");
    assert_eq!(user, john());

    let key = h.namespace.key_for(&claims.jti);
    assert_eq!(h.store.get(&key).await.expect("get").as_deref(), Some("1000000000"));
}

#[tokio::test]
async fn test_validated_session_after_login() {
    let h = Harness::new();
    let sessions = h.sessions();
    let mut jar = MemoryCookieJar::new();
    sessions.login(&john(), &mut jar).await.expect("login");

    let mut next = jar.next_request();
    assert_eq!(sessions.validated_session(&mut next).await, Some(john()));
    assert!(!next.was_removed("token"));
}

#[tokio::test]
async fn test_validated_session_without_cookie() {
    let h = Harness::new();
    let mut jar = MemoryCookieJar::new();

    assert_eq!(h.sessions().validated_session(&mut jar).await, None);
    assert!(!jar.was_removed("token"));
}

#[tokio::test]
async fn test_logout_revokes_and_clears() {
    let h = Harness::new();
    let sessions = h.sessions();
    let mut jar = MemoryCookieJar::new();
    sessions.login(&john(), &mut jar).await.expect("login");
    let stolen = jar.next_request();

    let mut logout_jar = jar.next_request();
    let outcome = sessions.logout(&mut logout_jar).await;
    assert!(outcome.had_token);
    assert!(outcome.revoked);
    assert!(logout_jar.was_removed("token"));
    assert!(logout_jar.was_removed("user_data"));
    assert!(h.store.is_empty());

    let mut replay = stolen;
    assert_eq!(sessions.validated_session(&mut replay).await, None);
    assert!(replay.was_removed("token"));
    assert!(replay.was_removed("user_data"));
}

#[tokio::test]
async fn test_logout_of_expired_token_still_deletes_identifier() {
    let h = Harness::new();
    let sessions = h.sessions();
    let mut jar = MemoryCookieJar::new();
    let claims = sessions.login(&john(), &mut jar).await.expect("login");

    let key = h.namespace.key_for(&claims.jti);
    h.store.put(&key, &claims.sub, TTL * 10).await.expect("extend");
    h.clock.advance(TTL + TOLERANCE + 60);

    let mut next = jar.next_request();
    let outcome = sessions.logout(&mut next).await;
    assert!(outcome.revoked);
    assert!(!h.store.exists(&key).await.expect("exists"));
}

#[tokio::test]
async fn test_logout_without_session_still_clears() {
    let h = Harness::new();
    let sessions = h.sessions();

    let mut empty = MemoryCookieJar::new().with_cookie("user_data", "{}");
    let outcome = sessions.logout(&mut empty).await;
    assert!(!outcome.had_token);
    assert!(!outcome.revoked);
    assert!(empty.was_removed("token"));
    assert!(empty.get("user_data").is_none());

    let mut forged = MemoryCookieJar::new().with_cookie("token", "forged.token.value");
    let outcome = sessions.logout(&mut forged).await;
    assert!(outcome.had_token);
    assert!(!outcome.revoked);
    assert!(forged.was_removed("token"));
}

#[tokio::test]
async fn test_logout_with_store_down_still_clears() {
    let h = Harness::new();
    let mut jar = MemoryCookieJar::new();
    h.sessions().login(&john(), &mut jar).await.expect("login");

    let down = h.sessions_with_store(Arc::new(UnavailableStore));
    let mut next = jar.next_request();
    let outcome = down.logout(&mut next).await;
    assert!(outcome.had_token);
    assert!(!outcome.revoked);
    assert!(next.was_removed("token"));
    assert!(next.was_removed("user_data"));
}

#[tokio::test]
async fn test_profile_mismatch_is_rejected() {
    let h = Harness::new();
    let sessions = h.sessions();
    let mut jar = MemoryCookieJar::new();
    sessions.login(&john(), &mut jar).await.expect("login");

    let mut tampered = jar.next_request();
    let mut other = john();
    other.id = "2000000000".to_string();
    tampered.set(
        h.cookies
            .user_data_cookie(serde_json::to_string(&other).expect("json"), TTL),
    );

    assert_eq!(sessions.validated_session(&mut tampered).await, None);

    let token = jar.written("token").expect("token").value.clone();
    let mut unreadable = MemoryCookieJar::new()
        .with_cookie("token", token)
        .with_cookie("user_data", "{not json");
    assert_eq!(sessions.validated_session(&mut unreadable).await, None);
}

#[tokio::test]
async fn test_store_outage_does_not_clear_session() {
    let h = Harness::new();
    let mut jar = MemoryCookieJar::new();
    h.sessions().login(&john(), &mut jar).await.expect("login");

    let down = h.sessions_with_store(Arc::new(UnavailableStore));
    let mut next = jar.next_request();
    assert_eq!(down.validated_session(&mut next).await, None);
    assert!(!next.was_removed("token"));
    assert!(!next.was_removed("user_data"));
}

#[tokio::test]
async fn test_session_status_tells_outage_from_rejection() {
    let h = Harness::new();
    let sessions = h.sessions();
    let mut jar = MemoryCookieJar::new();
    sessions.login(&john(), &mut jar).await.expect("login");

    let mut next = jar.next_request();
    assert_eq!(
        sessions.session_status(&mut next).await,
        SessionStatus::Authenticated(john())
    );

    let down = h.sessions_with_store(Arc::new(UnavailableStore));
    let mut next = jar.next_request();
    assert_eq!(down.session_status(&mut next).await, SessionStatus::Unavailable);
    assert!(!next.was_removed("token"));

    let mut anonymous = MemoryCookieJar::new();
    assert_eq!(
        sessions.session_status(&mut anonymous).await,
        SessionStatus::Unauthenticated
    );
}

#[tokio::test]
async fn test_login_writes_no_cookies_when_store_is_down() {
    let h = Harness::new();
    let down = h.sessions_with_store(Arc::new(UnavailableStore));
    let mut jar = MemoryCookieJar::new();

    let err = down.login(&john(), &mut jar).await.expect_err("store down");
    assert!(err.is_store_unavailable());
    assert!(jar.written("token").is_none());
    assert!(jar.written("user_data").is_none());
}

#[tokio::test]
async fn test_login_without_signing_key_fails_cleanly() {
    let verification_only = SigningKey::new(vec![9u8; 64], "old", SigningAlgorithm::Hs512);
    let h = Harness::with_keys(StaticKeyProvider::empty().with_verification_key(verification_only));
    let mut jar = MemoryCookieJar::new();

    let err = h.sessions().login(&john(), &mut jar).await.expect_err("no key");
    assert!(matches!(err, Error::Signing { .. }));
    assert!(jar.written("token").is_none());
    assert!(h.store.is_empty());
}
