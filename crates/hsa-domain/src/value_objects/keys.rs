//! Signing key material

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Signature algorithms accepted by the token service
///
/// Exactly one is supported. Anything else found in a token header,
/// including `none`, is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SigningAlgorithm {
    /// HMAC with SHA-512
    #[default]
    #[serde(rename = "HS512")]
    Hs512,
}

impl SigningAlgorithm {
    /// JOSE name of the algorithm
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hs512 => "HS512",
        }
    }

    /// Minimum key length in bytes
    pub fn min_key_len(&self) -> usize {
        match self {
            Self::Hs512 => 32,
        }
    }
}

impl std::fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded key material with its identifier
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey {
    material: Arc<[u8]>,
    key_id: String,
    algorithm: SigningAlgorithm,
}

impl SigningKey {
    /// Wrap decoded key bytes
    pub fn new(material: impl Into<Arc<[u8]>>, key_id: impl Into<String>, algorithm: SigningAlgorithm) -> Self {
        Self {
            material: material.into(),
            key_id: key_id.into(),
            algorithm,
        }
    }

    /// Raw key bytes
    pub fn material(&self) -> &[u8] {
        &self.material
    }

    /// Key identifier embedded in token headers
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Algorithm this key signs with
    pub fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("key_id", &self.key_id)
            .field("algorithm", &self.algorithm)
            .field("material", &format_args!("<{} bytes>", self.material.len()))
            .finish()
    }
}
