//! Login Use Case
//!
//! Looks the user up, checks the password, and hands the public user to
//! the session manager. The outcomes a client may see are the domain
//! errors `User not found`, `Invalid password` and `Invalid request body`;
//! everything else is an internal error.

use crate::use_cases::session_manager::SessionManager;
use hsa_domain::entities::PublicUser;
use hsa_domain::error::{DomainError, Result};
use hsa_domain::ports::{PasswordVerifier, SessionCookieStore, UserDirectory};
use std::sync::Arc;
use tracing::info;

/// Email and password as submitted
#[derive(Clone)]
pub struct LoginCredentials {
    /// Email
    pub email: String,
    /// Plaintext password
    pub password: String,
}

impl LoginCredentials {
    /// Bundle credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credential check in front of the session manager
#[derive(Clone)]
pub struct LoginService {
    users: Arc<dyn UserDirectory>,
    passwords: Arc<dyn PasswordVerifier>,
    sessions: Arc<SessionManager>,
}

impl LoginService {
    /// Create a login service
    pub fn new(
        users: Arc<dyn UserDirectory>,
        passwords: Arc<dyn PasswordVerifier>,
        sessions: Arc<SessionManager>,
    ) -> Self {
        Self {
            users,
            passwords,
            sessions,
        }
    }

    /// Authenticate and open a session
    pub async fn login(
        &self,
        credentials: &LoginCredentials,
        jar: &mut dyn SessionCookieStore,
    ) -> Result<PublicUser> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(DomainError::InvalidRequestBody.into());
        }

        let record = self
            .users
            .find_user_by_email(&credentials.email)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if !self
            .passwords
            .verify_password(&credentials.password, &record.password_hash)
            .await?
        {
            info!(user = %record.id, "Login rejected: invalid password");
            return Err(DomainError::InvalidPassword.into());
        }

        let user = PublicUser::from(record);
        self.sessions.login(&user, jar).await?;
        Ok(user)
    }
}
