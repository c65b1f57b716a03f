//! Shared handler state

use hsa_application::{LoginService, RequestGate, SessionManager};
use hsa_domain::ports::ErrorSink;
use std::sync::Arc;

/// Services shared by every request
///
/// Cheap to clone; everything behind it is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Login, logout and session validation
    pub sessions: Arc<SessionManager>,
    /// Credential check in front of the session manager
    pub login: Arc<LoginService>,
    /// Path-policy gate
    pub gate: Arc<RequestGate>,
    /// Destination for errors reported generically to clients
    pub errors: Arc<dyn ErrorSink>,
}
