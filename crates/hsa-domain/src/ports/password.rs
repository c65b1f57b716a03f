//! Password Verifier Port

use crate::error::Result;
use async_trait::async_trait;

/// Checks a plaintext password against a stored hash
#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// `Ok(true)` on match, `Ok(false)` on mismatch
    ///
    /// # Errors
    /// Unparseable hashes or a failed worker surface as internal errors,
    /// never as a mismatch.
    async fn verify_password(&self, plain: &str, hash: &str) -> Result<bool>;
}
