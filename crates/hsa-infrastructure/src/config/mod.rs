//! Configuration management
//!
//! [`AppConfig`] is assembled by [`loader::ConfigLoader`] from defaults, an
//! optional TOML file and environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
