//! Claims Verifier Capability
//!
//! Two implementations share this trait: a structural one that only checks
//! the token itself, and an authoritative one that also requires the token
//! identifier to be present in the revocation store. Callers that need
//! freshness must check [`ClaimsVerifier::strength`] rather than accept any
//! verifier.

use crate::error::Result;
use crate::value_objects::ClaimSet;
use async_trait::async_trait;

/// How much a successful verification proves
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerificationStrength {
    /// Signature, issuer, audience and expiry only
    Structural,
    /// Structural plus revocation store presence
    Authoritative,
}

impl VerificationStrength {
    /// Whether this strength satisfies `required`
    pub fn satisfies(self, required: VerificationStrength) -> bool {
        self >= required
    }
}

/// Verifies a token string into claims
#[async_trait]
pub trait ClaimsVerifier: Send + Sync {
    /// What a successful verification by this verifier proves
    fn strength(&self) -> VerificationStrength;

    /// `Ok(Some)` for an accepted token, `Ok(None)` for a rejected one
    ///
    /// # Errors
    /// Only when the verifier cannot decide, such as an unreachable store.
    async fn verify_claims(&self, token: &str) -> Result<Option<ClaimSet>>;
}
