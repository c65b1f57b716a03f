//! User entities
//!
//! [`UserRecord`] carries the password hash and never leaves the server.
//! [`PublicUser`] is the only form that reaches claim derivation or the
//! profile cookie.

use serde::{Deserialize, Serialize};

/// A user as stored in the user directory
#[derive(Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user ID
    pub id: String,
    /// User email
    pub email: String,
    /// Display name
    pub name: String,
    /// Argon2 PHC-format password hash
    #[serde(rename = "password")]
    pub password_hash: String,
    /// Optional role (e.g. "admin")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserRecord {
    /// Strip credential material
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// User without credential material, safe to send to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    /// Unique user ID
    pub id: String,
    /// User email
    pub email: String,
    /// Display name
    pub name: String,
    /// Optional role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl From<UserRecord> for PublicUser {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email,
            name: record.name,
            role: record.role,
        }
    }
}
