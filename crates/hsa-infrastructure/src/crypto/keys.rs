//! Key material decoding and the static key provider

use crate::config::KeysConfig;
use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use hsa_domain::error::{Error, Result};
use hsa_domain::ports::KeyProvider;
use hsa_domain::value_objects::{SigningAlgorithm, SigningKey};
use std::collections::HashMap;

use crate::constants::{JWT_CURRENT_KID_ENV, JWT_CURRENT_SECRET_ENV};

/// URL-safe alphabet, padding optional
const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a base64url or standard base64 secret
///
/// Both alphabets are accepted, with or without padding, and surrounding
/// whitespace is ignored. The decoded key must be long enough for
/// `algorithm`.
pub fn decode_key_material(encoded: &str, algorithm: SigningAlgorithm) -> Result<Vec<u8>> {
    let normalized: String = encoded
        .trim()
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = LENIENT_URL_SAFE
        .decode(normalized.as_bytes())
        .map_err(|e| Error::configuration_with_source("Key material is not valid base64", e))?;

    if bytes.len() < algorithm.min_key_len() {
        return Err(Error::configuration(format!(
            "{} key must decode to at least {} bytes, got {}",
            algorithm,
            algorithm.min_key_len(),
            bytes.len()
        )));
    }
    Ok(bytes)
}

/// Key provider over keys decoded once at startup
///
/// Holds at most one signing key plus any number of verification-only
/// keys indexed by `kid`.
#[derive(Debug, Clone, Default)]
pub struct StaticKeyProvider {
    current: Option<SigningKey>,
    verification: HashMap<String, SigningKey>,
}

impl StaticKeyProvider {
    /// Provider with a single signing key
    pub fn new(current: SigningKey) -> Self {
        Self {
            current: Some(current),
            verification: HashMap::new(),
        }
    }

    /// Provider with no signing key; every issuance fails
    pub fn empty() -> Self {
        Self::default()
    }

    /// Accept tokens signed with `key` without issuing with it
    pub fn with_verification_key(mut self, key: SigningKey) -> Self {
        self.verification.insert(key.key_id().to_string(), key);
        self
    }

    /// Build from configuration
    ///
    /// A missing secret or kid is tolerated here and reported by
    /// [`KeyProvider::current_key`]; a secret that does not decode is not.
    pub fn from_config(config: &KeysConfig) -> Result<Self> {
        let algorithm = SigningAlgorithm::Hs512;

        let current = match (&config.current_secret, &config.current_kid) {
            (Some(secret), Some(kid)) if !secret.trim().is_empty() && !kid.trim().is_empty() => {
                let material = decode_key_material(secret, algorithm)?;
                Some(SigningKey::new(material, kid.trim(), algorithm))
            }
            _ => None,
        };

        let mut provider = Self {
            current,
            verification: HashMap::new(),
        };
        for extra in &config.verification_keys {
            let material = decode_key_material(&extra.secret, algorithm)?;
            provider = provider.with_verification_key(SigningKey::new(
                material,
                extra.kid.trim(),
                algorithm,
            ));
        }
        Ok(provider)
    }
}

impl KeyProvider for StaticKeyProvider {
    fn current_key(&self) -> Result<SigningKey> {
        self.current.clone().ok_or_else(|| {
            Error::configuration(format!(
                "{JWT_CURRENT_SECRET_ENV} and {JWT_CURRENT_KID_ENV} must both be set"
            ))
        })
    }

    fn key_for_id(&self, kid: &str) -> Option<SigningKey> {
        match &self.current {
            Some(key) if key.key_id() == kid => Some(key.clone()),
            _ => self.verification.get(kid).cloned(),
        }
    }
}
