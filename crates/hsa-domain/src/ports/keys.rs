//! Key Provider Port

use crate::error::Result;
use crate::value_objects::SigningKey;

/// Resolves signing and verification keys
///
/// Key material is decoded once at construction and never changes
/// afterwards, so implementations are shared freely across requests.
pub trait KeyProvider: Send + Sync + std::fmt::Debug {
    /// The single key used for issuance
    ///
    /// # Errors
    /// `Error::Configuration` when the secret or its identifier is missing.
    fn current_key(&self) -> Result<SigningKey>;

    /// Key for a token header `kid`, including verification-only keys
    fn key_for_id(&self, kid: &str) -> Option<SigningKey>;
}
