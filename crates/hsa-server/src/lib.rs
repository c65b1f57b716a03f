//! # Hybrid Session Auth Server
//!
//! HTTP surface for the session protocol: the login, logout and
//! session-check endpoints, the request gate middleware in front of every
//! route, and the `hsa` command line.
//!
//! ## Endpoints
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `POST` | `/api/v1/auth/login` | [`handlers::auth::login_handler`] |
//! | `GET`, `POST` | `/api/v1/auth/logout` | [`handlers::auth::logout_handler`] |
//! | `GET` | `/api/v1/auth` | [`handlers::auth::session_handler`] |
//! | `GET` | `/app` | [`handlers::pages::app_page`] |
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AppState`] | Shared services handed to every handler |
//! | [`AppStateBuilder`] | Builder that checks every service is present |
//! | [`JarCookies`] | Session cookie port over the request's cookie jar |

pub mod builder;
pub mod cookies;
pub mod gate;
pub mod handlers;
pub mod init;
pub mod models;
pub mod router;
pub mod state;

pub use builder::{AppStateBuilder, BuilderError};
pub use cookies::JarCookies;
pub use init::run_server;
pub use router::build_router;
pub use state::AppState;
