//! Cryptographic services module
//!
//! This module provides:
//! - Key material decoding and the static key provider
//! - HS512 JWT issuance and verification
//! - Password hashing and verification with Argon2id
//! - Secure random token generation

mod jwt;
mod keys;
mod password;
mod token;

pub use jwt::JwtTokenService;
pub use keys::{StaticKeyProvider, decode_key_material};
pub use password::Argon2PasswordVerifier;
pub use token::TokenGenerator;
