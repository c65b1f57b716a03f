//! Token Service Port

use crate::error::{Result, VerificationFailure};
use crate::value_objects::{ClaimSet, IssuedToken, SubjectClaims};

/// Issues and verifies signed claim sets
///
/// Pure computation over the key provider; no store access.
pub trait TokenService: Send + Sync + std::fmt::Debug {
    /// Sign a fresh claim set for `subject`
    ///
    /// Generates the token identifier and fills in issued-at, expiry,
    /// issuer and audience.
    ///
    /// # Errors
    /// `Error::Signing` when no signing key is available.
    fn issue(&self, subject: &SubjectClaims) -> Result<IssuedToken>;

    /// Full verification: signature, algorithm, key id, issuer, audience,
    /// expiry with clock tolerance
    fn verify(&self, token: &str) -> std::result::Result<ClaimSet, VerificationFailure>;

    /// Same as [`TokenService::verify`] but ignores expiry
    ///
    /// Used where only provenance matters, such as logout.
    fn verify_authenticity(&self, token: &str)
    -> std::result::Result<ClaimSet, VerificationFailure>;

    /// Lifetime in seconds given to newly issued tokens
    fn token_lifetime_secs(&self) -> u64;
}
