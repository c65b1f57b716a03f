//! HS512 JWT token service
//!
//! Tokens carry `alg`, `kid` and `typ=JWT` in the header. Verification
//! resolves the key by `kid`, lets `jsonwebtoken` check the signature,
//! issuer and audience, and then checks expiry against the injected clock
//! so the tolerance window is exact.

use crate::config::JwtConfig;
use crate::constants::{JTI_RANDOM_BYTES, JWT_TYPE};
use crate::crypto::TokenGenerator;
use crate::error_ext::ErrorContext;
use hsa_domain::error::{Error, Result, VerificationFailure};
use hsa_domain::ports::{Clock, KeyProvider, TokenService};
use hsa_domain::value_objects::{ClaimSet, IssuedToken, SigningAlgorithm, SubjectClaims};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use tracing::debug;

/// Claims every token must carry
const REQUIRED_CLAIMS: [&str; 4] = ["exp", "iss", "aud", "sub"];

fn jwt_algorithm(algorithm: SigningAlgorithm) -> Algorithm {
    match algorithm {
        SigningAlgorithm::Hs512 => Algorithm::HS512,
    }
}

/// Issues and verifies HS512 tokens
#[derive(Debug, Clone)]
pub struct JwtTokenService {
    keys: Arc<dyn KeyProvider>,
    clock: Arc<dyn Clock>,
    issuer: String,
    audience: String,
    expiration_secs: u64,
    clock_tolerance_secs: u64,
    validation: Validation,
}

impl JwtTokenService {
    /// Create a token service
    pub fn new(config: &JwtConfig, keys: Arc<dyn KeyProvider>, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(jwt_algorithm(SigningAlgorithm::Hs512));
        // Expiry is checked against `clock`, not the system time
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&REQUIRED_CLAIMS);

        Self {
            keys,
            clock,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            expiration_secs: config.expiration_secs,
            clock_tolerance_secs: config.clock_tolerance_secs,
            validation,
        }
    }

    fn decode(
        &self,
        token: &str,
        check_expiry: bool,
    ) -> std::result::Result<ClaimSet, VerificationFailure> {
        let header = jsonwebtoken::decode_header(token).map_err(|e| {
            debug!(error = %e, "Token header rejected");
            VerificationFailure::Malformed
        })?;

        if header.alg != Algorithm::HS512 {
            return Err(VerificationFailure::InvalidSignature);
        }
        if header.typ.as_deref() != Some(JWT_TYPE) {
            return Err(VerificationFailure::Malformed);
        }
        let key = header
            .kid
            .as_deref()
            .and_then(|kid| self.keys.key_for_id(kid))
            .ok_or(VerificationFailure::InvalidSignature)?;

        let data = jsonwebtoken::decode::<ClaimSet>(
            token,
            &DecodingKey::from_secret(key.material()),
            &self.validation,
        )
        .map_err(|e| classify(e.kind()))?;
        let claims = data.claims;

        if check_expiry
            && self.clock.now_secs() > claims.exp.saturating_add(self.clock_tolerance_secs)
        {
            return Err(VerificationFailure::Expired);
        }
        Ok(claims)
    }
}

fn classify(kind: &ErrorKind) -> VerificationFailure {
    match kind {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
            VerificationFailure::InvalidSignature
        }
        ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
            VerificationFailure::ClaimMismatch
        }
        ErrorKind::ExpiredSignature => VerificationFailure::Expired,
        _ => VerificationFailure::Malformed,
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, subject: &SubjectClaims) -> Result<IssuedToken> {
        let key = self
            .keys
            .current_key()
            .map_err(|e| Error::signing_with_source("No signing key available", e))?;

        let iat = self.clock.now_secs();
        let claims = ClaimSet {
            sub: subject.sub.clone(),
            email: subject.email.clone(),
            jti: TokenGenerator::generate_url_safe_token(JTI_RANDOM_BYTES),
            iat,
            exp: iat.saturating_add(self.expiration_secs),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            role: subject.role.clone(),
        };

        let mut header = Header::new(jwt_algorithm(key.algorithm()));
        header.kid = Some(key.key_id().to_string());
        header.typ = Some(JWT_TYPE.to_string());

        let token = jsonwebtoken::encode(
            &header,
            &claims,
            &EncodingKey::from_secret(key.material()),
        )
        .signing_context("Failed to sign token")?;

        Ok(IssuedToken { token, claims })
    }

    fn verify(&self, token: &str) -> std::result::Result<ClaimSet, VerificationFailure> {
        self.decode(token, true)
    }

    fn verify_authenticity(
        &self,
        token: &str,
    ) -> std::result::Result<ClaimSet, VerificationFailure> {
        self.decode(token, false)
    }

    fn token_lifetime_secs(&self) -> u64 {
        self.expiration_secs
    }
}
