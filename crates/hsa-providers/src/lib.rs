//! # Hybrid Session Auth - Provider Implementations
//!
//! Adapters for the storage-facing ports defined in `hsa-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Revocation | `RevocationStore` | Redis, InMemory |
//! | Users | `UserDirectory` | InMemory (JSON-seeded) |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! hsa-providers = { version = "0.1", default-features = false, features = ["store-memory"] }
//! ```

pub use hsa_domain::error::{Error, Result};
pub use hsa_domain::ports::{RevocationStore, UserDirectory};

/// Revocation store implementations
pub mod revocation;

/// User directory implementations
pub mod users;
