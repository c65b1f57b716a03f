//! Token claim sets
//!
//! [`SubjectClaims`] is what callers provide; [`ClaimSet`] is what gets
//! signed, with the identifier and timestamps filled in by the token service.

use crate::entities::PublicUser;
use serde::{Deserialize, Serialize};

/// Caller-provided part of a claim set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectClaims {
    /// Subject (user ID)
    pub sub: String,
    /// User email
    pub email: String,
    /// Optional role
    pub role: Option<String>,
}

impl From<&PublicUser> for SubjectClaims {
    fn from(user: &PublicUser) -> Self {
        Self {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

/// Signed token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// Subject (user ID)
    pub sub: String,
    /// User email
    pub email: String,
    /// Token identifier, unique per issuance
    pub jti: String,
    /// Issued at (unix seconds)
    pub iat: u64,
    /// Expiration (unix seconds)
    pub exp: u64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Optional role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl ClaimSet {
    /// Total lifetime the token was issued with
    pub fn lifetime_secs(&self) -> u64 {
        self.exp.saturating_sub(self.iat)
    }

    /// Remaining validity at `now` (0 if expired)
    pub fn remaining_secs(&self, now: u64) -> u64 {
        self.exp.saturating_sub(now)
    }

    /// The caller-provided part, without generated fields
    pub fn subject(&self) -> SubjectClaims {
        SubjectClaims {
            sub: self.sub.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }

    /// Whether the claims carry the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }
}

/// A freshly signed token with the claims that went into it
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact serialized token
    pub token: String,
    /// Claims embedded in the token
    pub claims: ClaimSet,
}
