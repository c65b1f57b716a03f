//! Authentication configuration types

use crate::constants::{
    ARGON2_ITERATIONS, ARGON2_MEMORY_KIB, ARGON2_OUTPUT_LEN, ARGON2_PARALLELISM,
    JWT_DEFAULT_AUDIENCE, JWT_DEFAULT_ISSUER,
};
use hsa_domain::constants::{
    DEFAULT_CLOCK_TOLERANCE_SECS, DEFAULT_JTI_PREFIX, DEFAULT_TOKEN_TTL_SECS,
};
use hsa_domain::value_objects::CookieSettings;
use serde::{Deserialize, Serialize};

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// `iss` claim written and required
    pub issuer: String,

    /// `aud` claim written and required
    pub audience: String,

    /// Token lifetime in seconds; also the cookie max-age and store TTL
    pub expiration_secs: u64,

    /// Seconds past `exp` a token is still accepted
    pub clock_tolerance_secs: u64,

    /// Prefix for token identifiers in the revocation store
    pub jti_prefix: String,
}

/// Returns default JWT configuration with:
/// - 7 day lifetime
/// - 5 second clock tolerance
impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            issuer: JWT_DEFAULT_ISSUER.to_string(),
            audience: JWT_DEFAULT_AUDIENCE.to_string(),
            expiration_secs: DEFAULT_TOKEN_TTL_SECS,
            clock_tolerance_secs: DEFAULT_CLOCK_TOLERANCE_SECS,
            jti_prefix: DEFAULT_JTI_PREFIX.to_string(),
        }
    }
}

/// An extra key accepted for verification only
#[derive(Clone, Serialize, Deserialize)]
pub struct VerificationKeyConfig {
    /// Key identifier matched against token headers
    pub kid: String,
    /// Base64 or base64url key material
    pub secret: String,
}

impl std::fmt::Debug for VerificationKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationKeyConfig")
            .field("kid", &self.kid)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Key material configuration
///
/// The active pair is normally supplied through `JWT_CURRENT_SECRET` and
/// `JWT_CURRENT_KID`.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    /// Base64 or base64url signing secret
    pub current_secret: Option<String>,
    /// Identifier of the signing secret
    pub current_kid: Option<String>,
    /// Previous keys still accepted for verification
    pub verification_keys: Vec<VerificationKeyConfig>,
}

impl std::fmt::Debug for KeysConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeysConfig")
            .field(
                "current_secret",
                &self.current_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("current_kid", &self.current_kid)
            .field("verification_keys", &self.verification_keys)
            .finish()
    }
}

/// Argon2id parameters for password hashing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Iterations
    pub iterations: u32,
    /// Lanes
    pub parallelism: u32,
    /// Output length in bytes
    pub output_len: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: ARGON2_MEMORY_KIB,
            iterations: ARGON2_ITERATIONS,
            parallelism: ARGON2_PARALLELISM,
            output_len: ARGON2_OUTPUT_LEN,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Signing and verification keys
    pub keys: KeysConfig,

    /// Session cookie pair
    pub cookies: CookieSettings,

    /// Password hashing parameters
    pub password: PasswordConfig,
}
