//! Use cases

pub mod login;
pub mod session_manager;

pub use login::{LoginCredentials, LoginService};
pub use session_manager::{LogoutOutcome, SessionManager, SessionStatus};
