//! # Infrastructure Layer
//!
//! Technical concerns shared by the application and server crates.
//!
//! ### Security
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | Key provider, JWT token service, Argon2id passwords, random tokens |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered configuration with validation |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_sink`] | Tracing-backed sink for unhandled errors |
//!
//! ### Time
//! | Module | Description |
//! |--------|-------------|
//! | [`clock`] | System and manually advanced clocks |

pub mod clock;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod error_ext;
pub mod error_sink;
pub mod logging;

// Re-export commonly used types
pub use clock::{ManualClock, SystemClock};
pub use error_ext::ErrorContext;
pub use error_sink::TracingErrorSink;
