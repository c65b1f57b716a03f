//! Session Manager Use Case
//!
//! Owns the session cookie pair: the HTTP-only `token` cookie and the
//! script-readable `user_data` profile cookie. A session is valid only when
//! the token passes authoritative verification and the profile's `id`
//! equals the token's `sub`.
//!
//! Store writes and cookie writes are not atomic. Login registers the
//! token identifier before any cookie is handed out, so the worst case is
//! an orphaned store entry that expires on its own.

use crate::domain_services::verification::AuthoritativeVerifier;
use hsa_domain::entities::PublicUser;
use hsa_domain::error::Result;
use hsa_domain::ports::{RevocationStore, SessionCookieStore, TokenService};
use hsa_domain::value_objects::{ClaimSet, CookieSettings, RevocationNamespace, SubjectClaims};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What logout found and did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogoutOutcome {
    /// A token cookie was present
    pub had_token: bool,
    /// A revocation entry was deleted
    pub revoked: bool,
}

/// Result of checking the session cookie pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Authoritatively valid, profile matches the token subject
    Authenticated(PublicUser),
    /// No session, or one that failed verification or reconciliation
    Unauthenticated,
    /// The revocation store could not be reached; the pair is untouched
    Unavailable,
}

impl SessionStatus {
    /// The user, if authenticated
    pub fn into_user(self) -> Option<PublicUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated | Self::Unavailable => None,
        }
    }
}

/// Login, logout and session validation over the cookie pair
#[derive(Debug, Clone)]
pub struct SessionManager {
    tokens: Arc<dyn TokenService>,
    store: Arc<dyn RevocationStore>,
    verifier: AuthoritativeVerifier,
    cookies: CookieSettings,
    namespace: RevocationNamespace,
}

impl SessionManager {
    /// Create a session manager
    pub fn new(
        tokens: Arc<dyn TokenService>,
        store: Arc<dyn RevocationStore>,
        cookies: CookieSettings,
        namespace: RevocationNamespace,
    ) -> Self {
        let verifier =
            AuthoritativeVerifier::new(Arc::clone(&tokens), Arc::clone(&store), namespace.clone());
        Self {
            tokens,
            store,
            verifier,
            cookies,
            namespace,
        }
    }

    /// The authoritative verifier this manager validates with
    pub fn verifier(&self) -> &AuthoritativeVerifier {
        &self.verifier
    }

    /// Cookie names and flags
    pub fn cookie_settings(&self) -> &CookieSettings {
        &self.cookies
    }

    /// Issue a token for `user`, register it, then write both cookies
    ///
    /// # Errors
    /// Signing and store failures. No cookie is written when either fails.
    pub async fn login(
        &self,
        user: &PublicUser,
        jar: &mut dyn SessionCookieStore,
    ) -> Result<ClaimSet> {
        let profile = serde_json::to_string(user)?;
        let issued = self.tokens.issue(&SubjectClaims::from(user))?;
        let ttl = issued.claims.lifetime_secs();

        self.store
            .put(
                &self.namespace.key_for(&issued.claims.jti),
                &issued.claims.sub,
                ttl,
            )
            .await?;

        jar.set(self.cookies.token_cookie(issued.token, ttl));
        jar.set(self.cookies.user_data_cookie(profile, ttl));

        info!(sub = %issued.claims.sub, jti = %issued.claims.jti, "Session created");
        Ok(issued.claims)
    }

    /// Revoke the current token, if authentic, and clear both cookies
    ///
    /// Never fails. An expired token is still revoked; a store failure is
    /// logged and the cookies are cleared anyway.
    pub async fn logout(&self, jar: &mut dyn SessionCookieStore) -> LogoutOutcome {
        let mut outcome = LogoutOutcome::default();

        if let Some(token) = jar.get(&self.cookies.token_name) {
            outcome.had_token = true;
            match self.tokens.verify_authenticity(&token) {
                Ok(claims) => match self.revoke(&claims.jti).await {
                    Ok(deleted) => outcome.revoked = deleted,
                    Err(e) => {
                        warn!(error = %e, jti = %claims.jti, "Failed to delete revocation entry on logout");
                    }
                },
                Err(failure) => debug!(reason = %failure, "Logout with unauthentic token"),
            }
        }

        self.clear(jar);
        outcome
    }

    /// The profile of an authoritatively valid session
    ///
    /// Invalid or revoked tokens clear the pair. A store outage yields
    /// `None` without clearing, since the session may well be valid.
    pub async fn validated_session(&self, jar: &mut dyn SessionCookieStore) -> Option<PublicUser> {
        self.session_status(jar).await.into_user()
    }

    /// Like [`SessionManager::validated_session`], but tells a store outage
    /// apart from a rejected session
    pub async fn session_status(&self, jar: &mut dyn SessionCookieStore) -> SessionStatus {
        let Some(token) = jar.get(&self.cookies.token_name) else {
            return SessionStatus::Unauthenticated;
        };

        let claims = match self.verifier.verify_authoritative(&token).await {
            Ok(Some(claims)) => claims,
            Ok(None) => {
                self.clear(jar);
                return SessionStatus::Unauthenticated;
            }
            Err(e) => {
                warn!(error = %e, "Revocation store unavailable, treating session as unauthenticated");
                return SessionStatus::Unavailable;
            }
        };

        let profile = jar
            .get(&self.cookies.user_data_name)
            .and_then(|raw| serde_json::from_str::<PublicUser>(&raw).ok());

        match profile {
            Some(user) if user.id == claims.sub => SessionStatus::Authenticated(user),
            Some(_) => {
                debug!(sub = %claims.sub, "Profile cookie does not match token subject");
                SessionStatus::Unauthenticated
            }
            None => {
                debug!(sub = %claims.sub, "Profile cookie missing or unreadable");
                SessionStatus::Unauthenticated
            }
        }
    }

    /// Delete the revocation entry for `jti`
    ///
    /// Every token carrying that identifier fails authoritative
    /// verification from now on.
    pub async fn revoke(&self, jti: &str) -> Result<bool> {
        let deleted = self.store.delete(&self.namespace.key_for(jti)).await?;
        if deleted {
            info!(jti, "Session revoked");
        }
        Ok(deleted)
    }

    /// Expire both cookies
    pub fn clear(&self, jar: &mut dyn SessionCookieStore) {
        for name in self.cookies.names() {
            jar.remove(name);
        }
    }
}
