//! Domain constants
//!
//! Values that are part of the session protocol itself. Deployment tunables
//! live in the infrastructure configuration.

/// Name of the cookie carrying the signed token
pub const TOKEN_COOKIE_NAME: &str = "token";

/// Name of the cookie carrying the JSON-encoded public user
pub const USER_DATA_COOKIE_NAME: &str = "user_data";

/// Prefix for token identifiers in the revocation store
pub const DEFAULT_JTI_PREFIX: &str = "jwt::";

/// Token lifetime in seconds (7 days)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400 * 7;

/// Clock skew tolerated when checking expiry, in seconds
pub const DEFAULT_CLOCK_TOLERANCE_SECS: u64 = 5;

/// Request header carrying the resolved path for downstream consumers
pub const CURRENT_PATH_HEADER: &str = "x-current-path";

/// Role required for administrative paths
pub const ADMIN_ROLE: &str = "admin";
