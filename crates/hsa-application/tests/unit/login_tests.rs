//! Credential check in front of the session manager

use crate::support::{Harness, UnavailableStore, john};
use hsa_application::{LoginCredentials, LoginService, MemoryCookieJar, SessionManager};
use hsa_domain::entities::UserRecord;
use hsa_domain::error::{DomainError, GENERIC_ERROR_MESSAGE};
use hsa_domain::ports::{PasswordVerifier, SessionCookieStore, UserDirectory};
use hsa_infrastructure::config::PasswordConfig;
use hsa_infrastructure::crypto::Argon2PasswordVerifier;
use hsa_providers::users::InMemoryUserDirectory;
use std::sync::Arc;

const PASSWORD: &str = "correct horse battery staple";

fn fast_argon2() -> Argon2PasswordVerifier {
    Argon2PasswordVerifier::new(&PasswordConfig {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
        output_len: 32,
    })
    .expect("argon2 params")
}

fn service(sessions: SessionManager) -> LoginService {
    let passwords = fast_argon2();
    let user = john();
    let record = UserRecord {
        id: user.id,
        email: user.email,
        name: user.name,
        password_hash: passwords.hash_password(PASSWORD).expect("hash"),
        role: None,
    };
    let users = InMemoryUserDirectory::from_records([record]).expect("directory");

    LoginService::new(
        Arc::new(users) as Arc<dyn UserDirectory>,
        Arc::new(passwords) as Arc<dyn PasswordVerifier>,
        Arc::new(sessions),
    )
}

#[tokio::test]
async fn test_login_success_returns_public_user() {
    let h = Harness::new();
    let login = service(h.sessions());
    let mut jar = MemoryCookieJar::new();

    let user = login
        .login(&LoginCredentials::new("john@example.com", PASSWORD), &mut jar)
        .await
        .expect("login");

    assert_eq!(user, john());
    assert!(jar.get("token").is_some());
    assert!(jar.get("user_data").is_some());
    assert_eq!(h.store.len(), 1);
}

#[tokio::test]
async fn test_unknown_email() {
    let h = Harness::new();
    let login = service(h.sessions());
    let mut jar = MemoryCookieJar::new();

    let err = login
        .login(&LoginCredentials::new("jane@example.com", PASSWORD), &mut jar)
        .await
        .expect_err("unknown");
    assert_eq!(err.as_domain(), Some(DomainError::UserNotFound));
    assert_eq!(err.client_message(), "User not found");
}

#[tokio::test]
async fn test_wrong_password_sets_no_cookies() {
    let h = Harness::new();
    let login = service(h.sessions());
    let mut jar = MemoryCookieJar::new();

    let err = login
        .login(&LoginCredentials::new("john@example.com", "hunter2"), &mut jar)
        .await
        .expect_err("mismatch");
    assert_eq!(err.as_domain(), Some(DomainError::InvalidPassword));
    assert!(jar.get("token").is_none());
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn test_empty_fields_are_rejected() {
    let h = Harness::new();
    let login = service(h.sessions());
    let mut jar = MemoryCookieJar::new();

    for (email, password) in [("", PASSWORD), ("john@example.com", ""), ("   ", PASSWORD)] {
        let err = login
            .login(&LoginCredentials::new(email, password), &mut jar)
            .await
            .expect_err("empty field");
        assert_eq!(err.as_domain(), Some(DomainError::InvalidRequestBody));
    }
}

#[tokio::test]
async fn test_store_outage_is_generic_error() {
    let h = Harness::new();
    let login = service(h.sessions_with_store(Arc::new(UnavailableStore)));
    let mut jar = MemoryCookieJar::new();

    let err = login
        .login(&LoginCredentials::new("john@example.com", PASSWORD), &mut jar)
        .await
        .expect_err("store down");
    assert!(err.is_store_unavailable());
    assert_eq!(err.client_message(), GENERIC_ERROR_MESSAGE);
    assert!(jar.get("token").is_none());
}

#[test]
fn test_credentials_debug_hides_password() {
    let rendered = format!("{:?}", LoginCredentials::new("john@example.com", PASSWORD));
    assert!(rendered.contains("john@example.com"));
    assert!(!rendered.contains(PASSWORD));
}
