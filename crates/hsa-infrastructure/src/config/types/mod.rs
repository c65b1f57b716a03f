//! Configuration types module

pub mod app;
pub mod auth;
pub mod logging;
pub mod server;
pub mod store;

// Re-export main types
pub use app::{AppConfig, UsersConfig};
pub use auth::{AuthConfig, JwtConfig, KeysConfig, PasswordConfig, VerificationKeyConfig};
pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use store::{StoreBackend, StoreConfig};
