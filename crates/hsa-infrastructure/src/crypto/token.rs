//! Secure token generation

use base64::{Engine as _, engine::general_purpose};
use rand::RngCore;

/// Secure token generation
pub struct TokenGenerator;

impl TokenGenerator {
    /// `length` random bytes from the thread-local CSPRNG
    pub fn random_bytes(length: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; length];
        rand::rng().fill_bytes(&mut bytes);
        bytes
    }

    /// Generate a URL-safe secure token
    pub fn generate_url_safe_token(length: usize) -> String {
        general_purpose::URL_SAFE_NO_PAD.encode(Self::random_bytes(length))
    }

    /// Generate a standard base64 secret, as expected in `JWT_CURRENT_SECRET`
    pub fn generate_secret(length: usize) -> String {
        general_purpose::STANDARD.encode(Self::random_bytes(length))
    }
}
