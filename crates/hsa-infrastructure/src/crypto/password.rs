//! Password hashing and verification with Argon2id

use crate::config::PasswordConfig;
use argon2::{
    Algorithm, Argon2, Params, PasswordHasher, Version,
    password_hash::{PasswordHash, PasswordVerifier as _, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use hsa_domain::error::{Error, Result};
use hsa_domain::ports::PasswordVerifier;

/// Argon2id hasher and verifier
///
/// Verification reads parameters from the stored PHC string; the
/// configured parameters only apply to new hashes.
#[derive(Clone)]
pub struct Argon2PasswordVerifier {
    argon2: Argon2<'static>,
}

impl Argon2PasswordVerifier {
    /// Create a verifier with the given hashing parameters
    pub fn new(config: &PasswordConfig) -> Result<Self> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            Some(config.output_len),
        )
        .map_err(|e| Error::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password into a PHC string
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::internal(format!("Password hashing failed: {e}")))?;

        Ok(password_hash.to_string())
    }

    /// Blocking verification
    pub fn verify_blocking(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| Error::internal(format!("Invalid password hash format: {e}")))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl std::fmt::Debug for Argon2PasswordVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argon2PasswordVerifier").finish_non_exhaustive()
    }
}

#[async_trait]
impl PasswordVerifier for Argon2PasswordVerifier {
    async fn verify_password(&self, plain: &str, hash: &str) -> Result<bool> {
        let verifier = self.clone();
        let plain = plain.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || verifier.verify_blocking(&plain, &hash))
            .await
            .map_err(|e| Error::internal(format!("Password verification task failed: {e}")))?
    }
}
