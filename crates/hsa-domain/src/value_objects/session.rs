//! Session cookie pair and revocation key naming

use crate::constants::{DEFAULT_JTI_PREFIX, TOKEN_COOKIE_NAME, USER_DATA_COOKIE_NAME};
use serde::{Deserialize, Serialize};

/// SameSite attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSitePolicy {
    /// Only sent on same-site requests
    #[default]
    Strict,
    /// Sent on top-level cross-site navigation
    Lax,
}

/// A cookie the session manager wants written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// Cookie name
    pub name: String,
    /// Cookie value (unencoded)
    pub value: String,
    /// Hidden from client scripts
    pub http_only: bool,
    /// Only sent over secure transport
    pub secure: bool,
    /// SameSite attribute
    pub same_site: SameSitePolicy,
    /// Lifetime in seconds
    pub max_age_secs: u64,
    /// Cookie path
    pub path: String,
}

/// Names and transport flags for the session cookie pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieSettings {
    /// Name of the signed token cookie
    pub token_name: String,
    /// Name of the profile cookie
    pub user_data_name: String,
    /// Secure flag for both cookies
    pub secure: bool,
    /// SameSite policy for both cookies
    pub same_site: SameSitePolicy,
    /// Path for both cookies
    pub path: String,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            token_name: TOKEN_COOKIE_NAME.to_string(),
            user_data_name: USER_DATA_COOKIE_NAME.to_string(),
            secure: true,
            same_site: SameSitePolicy::Strict,
            path: "/".to_string(),
        }
    }
}

impl CookieSettings {
    /// The HTTP-only cookie carrying the signed token
    pub fn token_cookie(&self, token: String, max_age_secs: u64) -> SessionCookie {
        SessionCookie {
            name: self.token_name.clone(),
            value: token,
            http_only: true,
            secure: self.secure,
            same_site: self.same_site,
            max_age_secs,
            path: self.path.clone(),
        }
    }

    /// The script-readable cookie carrying the public user
    pub fn user_data_cookie(&self, json: String, max_age_secs: u64) -> SessionCookie {
        SessionCookie {
            name: self.user_data_name.clone(),
            value: json,
            http_only: false,
            secure: self.secure,
            same_site: self.same_site,
            max_age_secs,
            path: self.path.clone(),
        }
    }

    /// Both cookie names, token first
    pub fn names(&self) -> [&str; 2] {
        [&self.token_name, &self.user_data_name]
    }
}

/// Key naming for token identifiers in the revocation store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevocationNamespace {
    prefix: String,
}

impl RevocationNamespace {
    /// Namespace with a custom prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Store key for a token identifier
    pub fn key_for(&self, jti: &str) -> String {
        format!("{}{}", self.prefix, jti)
    }
}

impl Default for RevocationNamespace {
    fn default() -> Self {
        Self::new(DEFAULT_JTI_PREFIX)
    }
}
