//! Application Layer - Hybrid Session Auth
//!
//! Orchestrates the domain ports into the session protocol:
//!
//! - `domain_services::verification`: the structural and authoritative
//!   claims verifiers
//! - `domain_services::gate`: path-policy request gate
//! - `use_cases::session_manager`: login, logout and validated session
//!   over the cookie pair
//! - `use_cases::login`: credential check in front of the session manager
//!
//! ## Dependencies
//!
//! This crate depends only on `hsa-domain`. Keys, signing, storage and
//! HTTP come in through the port traits.

pub mod cookies;
pub mod domain_services;
pub mod use_cases;

pub use cookies::MemoryCookieJar;
pub use domain_services::*;
pub use use_cases::*;
