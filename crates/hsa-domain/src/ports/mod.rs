//! Domain Port Interfaces
//!
//! Boundary contracts between the session logic and everything that does
//! I/O, crypto, or timekeeping. Infrastructure and provider crates implement
//! them; the application crate depends only on the traits.
//!
//! | Port | Implemented by |
//! |------|----------------|
//! | [`KeyProvider`] | static key provider (env / config) |
//! | [`TokenService`] | JWT token service |
//! | [`RevocationStore`] | Redis and in-memory stores |
//! | [`UserDirectory`] | JSON-seeded in-memory directory |
//! | [`PasswordVerifier`] | Argon2id verifier |
//! | [`ErrorSink`] | tracing error sink |
//! | [`Clock`] | system clock |
//! | [`ClaimsVerifier`] | structural and authoritative verifiers |
//! | [`SessionCookieStore`] | HTTP cookie jar adapter |

/// Clock port
pub mod clock;
/// Cookie jar port
pub mod cookies;
/// Error sink port
pub mod error_sink;
/// Key provider port
pub mod keys;
/// Password verifier port
pub mod password;
/// Revocation store port
pub mod revocation;
/// Token service port
pub mod token;
/// User directory port
pub mod users;
/// Claims verifier capability
pub mod verifier;

pub use clock::Clock;
pub use cookies::SessionCookieStore;
pub use error_sink::ErrorSink;
pub use keys::KeyProvider;
pub use password::PasswordVerifier;
pub use revocation::RevocationStore;
pub use token::TokenService;
pub use users::UserDirectory;
pub use verifier::{ClaimsVerifier, VerificationStrength};
