//! Path policy for the request gate
//!
//! A path is subject to the gate when it matches a protected pattern and no
//! exclusion pattern. Patterns are either exact (`/app`) or prefix wildcards
//! (`/admin/*` matches every path under `/admin/`).

use crate::constants::{ADMIN_ROLE, CURRENT_PATH_HEADER};
use serde::{Deserialize, Serialize};

/// An exact or prefix-wildcard path pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathPattern(String);

impl PathPattern {
    /// Wrap a pattern string
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `path` matches this pattern
    pub fn matches(&self, path: &str) -> bool {
        match self.0.strip_suffix('*') {
            Some(prefix) => path.starts_with(prefix),
            None => path == self.0,
        }
    }
}

impl From<&str> for PathPattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

/// A role requirement for matching paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRule {
    /// Paths the rule applies to
    pub pattern: PathPattern,
    /// Role the claims must carry
    pub role: String,
}

impl RoleRule {
    /// Build a rule
    pub fn new(pattern: impl Into<PathPattern>, role: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            role: role.into(),
        }
    }
}

/// Request gate policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatePolicy {
    /// Patterns subject to the gate
    pub protected: Vec<PathPattern>,
    /// Patterns exempt even when protected
    pub exclusions: Vec<PathPattern>,
    /// Role requirements, first match wins
    pub role_rules: Vec<RoleRule>,
    /// Login page
    pub login_path: String,
    /// Where signed-in users land
    pub app_path: String,
    /// Page shown for missing roles
    pub access_denied_path: String,
    /// Paths under this prefix get status codes instead of redirects
    pub api_prefix: String,
    /// Request header carrying the resolved path to handlers
    pub current_path_header: String,
    /// Absolute origin for redirects; relative when unset
    pub base_url: Option<String>,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            protected: ["/app", "/app/*", "/admin", "/admin/*", "/api/admin/*"]
                .into_iter()
                .map(PathPattern::from)
                .collect(),
            exclusions: vec![PathPattern::from("/login")],
            role_rules: ["/admin", "/admin/*", "/api/admin/*"]
                .into_iter()
                .map(|p| RoleRule::new(p, ADMIN_ROLE))
                .collect(),
            login_path: "/login".to_string(),
            app_path: "/app".to_string(),
            access_denied_path: "/access-denied".to_string(),
            api_prefix: "/api/".to_string(),
            current_path_header: CURRENT_PATH_HEADER.to_string(),
            base_url: None,
        }
    }
}

impl GatePolicy {
    /// Whether the gate applies to `path`
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected.iter().any(|p| p.matches(path))
            && !self.exclusions.iter().any(|p| p.matches(path))
    }

    /// Whether `path` is the login page, ignoring a trailing slash
    pub fn is_login_path(&self, path: &str) -> bool {
        without_trailing_slash(path) == without_trailing_slash(&self.login_path)
    }

    /// Whether `path` answers with status codes rather than redirects
    pub fn is_api_path(&self, path: &str) -> bool {
        path.starts_with(&self.api_prefix)
    }

    /// Role required for `path`, if any
    pub fn required_role(&self, path: &str) -> Option<&str> {
        self.role_rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| rule.role.as_str())
    }

    /// Path plus query, as preserved for the post-login redirect
    pub fn return_target(path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{path}?{q}"),
            _ => path.to_string(),
        }
    }

    /// Prefix `path` with the configured origin
    pub fn absolute(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
            None => path.to_string(),
        }
    }

    /// Check the policy is internally consistent
    pub fn validate(&self) -> Result<(), String> {
        for (name, path) in [
            ("login_path", &self.login_path),
            ("app_path", &self.app_path),
            ("access_denied_path", &self.access_denied_path),
        ] {
            if !path.starts_with('/') {
                return Err(format!("gate.{name} must start with '/'"));
            }
        }
        if self.is_protected(&self.login_path) {
            return Err("gate.login_path must not be a protected path".to_string());
        }
        if self.is_protected(&self.access_denied_path) {
            return Err("gate.access_denied_path must not be a protected path".to_string());
        }
        if self.current_path_header.is_empty() {
            return Err("gate.current_path_header cannot be empty".to_string());
        }
        Ok(())
    }
}

fn without_trailing_slash(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
