//! Error handling types
//!
//! The taxonomy separates what may reach a client from what must not:
//!
//! | Variant | Client sees |
//! |---------|-------------|
//! | [`Error::Domain`] | the domain message, verbatim |
//! | [`Error::Verification`] | [`INVALID_SESSION_MESSAGE`] |
//! | everything else | [`GENERIC_ERROR_MESSAGE`] |

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Message returned to clients for any error that is not pre-approved
pub const GENERIC_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Message returned to clients for every token verification failure
pub const INVALID_SESSION_MESSAGE: &str = "Invalid session";

/// Why a token failed verification
///
/// Kept distinct internally for logging; collapsed to a single
/// "invalid session" outcome before anything reaches a client.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationFailure {
    /// Not a well-formed token (encoding, header, or payload shape)
    #[error("token is malformed")]
    Malformed,
    /// Signature and claims are fine but the token is past its expiry
    #[error("token has expired")]
    Expired,
    /// Signature mismatch, disallowed algorithm, or unknown key id
    #[error("token signature is invalid")]
    InvalidSignature,
    /// Issuer or audience does not match this deployment
    #[error("token issuer or audience mismatch")]
    ClaimMismatch,
}

impl VerificationFailure {
    /// The only message a client ever sees for a verification failure
    pub fn public_message(&self) -> &'static str {
        INVALID_SESSION_MESSAGE
    }
}

/// Known business errors, pre-approved for client visibility
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// No user is registered under the given email
    #[error("User not found")]
    UserNotFound,
    /// The password does not match the stored hash
    #[error("Invalid password")]
    InvalidPassword,
    /// The request payload is missing fields or is not valid JSON
    #[error("Invalid request body")]
    InvalidRequestBody,
}

/// Main error type for Hybrid Session Auth
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unusable configuration (key material, key id, settings)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Token could not be signed
    #[error("Signing error: {message}")]
    Signing {
        /// Description of the signing error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Token failed verification
    #[error("Verification failure: {0}")]
    Verification(#[from] VerificationFailure),

    /// Revocation store could not be reached or timed out
    #[error("Revocation store unavailable: {message}")]
    StoreUnavailable {
        /// Description of the store failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Known business error
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Creation helpers
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a signing error with source
    pub fn signing_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Signing {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a store unavailable error
    pub fn store_unavailable<S: Into<String>>(message: S) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store unavailable error with source
    pub fn store_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Classification
impl Error {
    /// Whether the error message is pre-approved for the client
    pub fn is_client_visible(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::Verification(_))
    }

    /// Whether this is a revocation store outage
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }

    /// Message safe to send to a client
    pub fn client_message(&self) -> String {
        match self {
            Self::Domain(err) => err.to_string(),
            Self::Verification(failure) => failure.public_message().to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// The domain error, when this is one
    pub fn as_domain(&self) -> Option<DomainError> {
        match self {
            Self::Domain(err) => Some(*err),
            _ => None,
        }
    }
}
