//! Value objects

pub mod claims;
pub mod gate_policy;
pub mod keys;
pub mod session;

pub use claims::{ClaimSet, IssuedToken, SubjectClaims};
pub use gate_policy::{GatePolicy, PathPattern, RoleRule};
pub use keys::{SigningAlgorithm, SigningKey};
pub use session::{CookieSettings, RevocationNamespace, SameSitePolicy, SessionCookie};
