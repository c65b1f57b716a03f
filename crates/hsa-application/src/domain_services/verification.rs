//! Claims verification
//!
//! [`StructuralVerifier`] checks only the token itself and is usable where
//! the revocation store is out of reach. [`AuthoritativeVerifier`] adds the
//! store lookup: a token whose identifier is absent counts as revoked.
//!
//! A token revoked moments ago still passes structural verification until
//! it expires. Anything that must honour logout immediately has to use the
//! authoritative path.

use async_trait::async_trait;
use hsa_domain::error::{Result, VerificationFailure};
use hsa_domain::ports::{ClaimsVerifier, RevocationStore, TokenService, VerificationStrength};
use hsa_domain::value_objects::{ClaimSet, RevocationNamespace};
use std::sync::Arc;
use tracing::debug;

/// Token-only verification, no store access
#[derive(Debug, Clone)]
pub struct StructuralVerifier {
    tokens: Arc<dyn TokenService>,
}

impl StructuralVerifier {
    /// Create a structural verifier
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self { tokens }
    }

    /// Claims if the token passes signature, issuer, audience and expiry
    /// checks
    pub fn verify_structural(&self, token: &str) -> Option<ClaimSet> {
        match self.tokens.verify(token) {
            Ok(claims) => Some(claims),
            Err(failure) => {
                log_rejection(failure);
                None
            }
        }
    }
}

fn log_rejection(failure: VerificationFailure) {
    debug!(reason = %failure, "Token rejected");
}

#[async_trait]
impl ClaimsVerifier for StructuralVerifier {
    fn strength(&self) -> VerificationStrength {
        VerificationStrength::Structural
    }

    async fn verify_claims(&self, token: &str) -> Result<Option<ClaimSet>> {
        Ok(self.verify_structural(token))
    }
}

/// Structural verification plus revocation store presence
#[derive(Debug, Clone)]
pub struct AuthoritativeVerifier {
    structural: StructuralVerifier,
    store: Arc<dyn RevocationStore>,
    namespace: RevocationNamespace,
}

impl AuthoritativeVerifier {
    /// Create an authoritative verifier
    pub fn new(
        tokens: Arc<dyn TokenService>,
        store: Arc<dyn RevocationStore>,
        namespace: RevocationNamespace,
    ) -> Self {
        Self {
            structural: StructuralVerifier::new(tokens),
            store,
            namespace,
        }
    }

    /// `Ok(None)` for invalid or revoked tokens
    ///
    /// # Errors
    /// `StoreUnavailable` when presence cannot be checked. Callers must not
    /// read that as "not revoked".
    pub async fn verify_authoritative(&self, token: &str) -> Result<Option<ClaimSet>> {
        let Some(claims) = self.structural.verify_structural(token) else {
            return Ok(None);
        };

        let key = self.namespace.key_for(&claims.jti);
        if self.store.exists(&key).await? {
            Ok(Some(claims))
        } else {
            debug!(jti = %claims.jti, "Token identifier not registered, treating as revoked");
            Ok(None)
        }
    }
}

#[async_trait]
impl ClaimsVerifier for AuthoritativeVerifier {
    fn strength(&self) -> VerificationStrength {
        VerificationStrength::Authoritative
    }

    async fn verify_claims(&self, token: &str) -> Result<Option<ClaimSet>> {
        self.verify_authoritative(token).await
    }
}
