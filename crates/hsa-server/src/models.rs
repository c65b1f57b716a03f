//! Request and response bodies

use hsa_domain::entities::PublicUser;
use hsa_domain::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body
///
/// Missing fields deserialize as empty strings so that every malformed
/// payload ends up as the same `Invalid request body` outcome.
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    /// Email
    #[serde(default)]
    #[validate(length(min = 1, message = "Email cannot be empty"))]
    pub email: String,
    /// Plaintext password
    #[serde(default)]
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

impl LoginRequest {
    /// Parse and validate a raw body
    ///
    /// # Errors
    /// `DomainError::InvalidRequestBody` for anything but a JSON object with
    /// non-empty `email` and `password` strings.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let request: Self =
            serde_json::from_slice(body).map_err(|_| DomainError::InvalidRequestBody)?;
        request
            .validate()
            .map_err(|_| DomainError::InvalidRequestBody)?;
        Ok(request)
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `{success, user?, error?}` body of the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the operation succeeded
    pub success: bool,
    /// Signed-in user, on login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<PublicUser>,
    /// Client-safe error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Success without payload
    pub fn success() -> Self {
        Self {
            success: true,
            user: None,
            error: None,
        }
    }

    /// Success carrying the user
    pub fn with_user(user: PublicUser) -> Self {
        Self {
            user: Some(user),
            ..Self::success()
        }
    }

    /// Failure with a client-safe message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            user: None,
            error: Some(message.into()),
        }
    }
}

/// Body of the session-check endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Whether the session passed authoritative validation
    pub authenticated: bool,
    /// The validated user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<PublicUser>,
}

impl From<Option<PublicUser>> for SessionResponse {
    fn from(user: Option<PublicUser>) -> Self {
        Self {
            authenticated: user.is_some(),
            user,
        }
    }
}

/// Body of gate denials on API paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDenial {
    /// Always false
    pub success: bool,
    /// `Unauthorized` or `Forbidden`
    pub message: String,
}

/// Body of the forced revocation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeResponse {
    /// Whether the request was processed
    pub success: bool,
    /// Whether an entry was deleted
    pub revoked: bool,
}
