//! App State Builder
//!
//! Wires the ports into the session manager, login service and gate.
//! Ensures every required adapter is provided before the state is built.

use crate::state::AppState;
use hsa_application::{LoginService, RequestGate, SessionManager, StructuralVerifier};
use hsa_domain::ports::{ErrorSink, PasswordVerifier, RevocationStore, TokenService, UserDirectory};
use hsa_domain::value_objects::{CookieSettings, GatePolicy, RevocationNamespace};
use hsa_infrastructure::TracingErrorSink;
use std::sync::Arc;

/// Builder for [`AppState`]
#[derive(Default)]
pub struct AppStateBuilder {
    tokens: Option<Arc<dyn TokenService>>,
    store: Option<Arc<dyn RevocationStore>>,
    users: Option<Arc<dyn UserDirectory>>,
    passwords: Option<Arc<dyn PasswordVerifier>>,
    errors: Option<Arc<dyn ErrorSink>>,
    cookies: CookieSettings,
    policy: GatePolicy,
    namespace: RevocationNamespace,
}

impl AppStateBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token service
    pub fn with_token_service(mut self, tokens: Arc<dyn TokenService>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Set the revocation store
    pub fn with_revocation_store(mut self, store: Arc<dyn RevocationStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the user directory
    pub fn with_user_directory(mut self, users: Arc<dyn UserDirectory>) -> Self {
        self.users = Some(users);
        self
    }

    /// Set the password verifier
    pub fn with_password_verifier(mut self, passwords: Arc<dyn PasswordVerifier>) -> Self {
        self.passwords = Some(passwords);
        self
    }

    /// Set the error sink (defaults to tracing)
    pub fn with_error_sink(mut self, errors: Arc<dyn ErrorSink>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Set cookie names and flags
    pub fn with_cookie_settings(mut self, cookies: CookieSettings) -> Self {
        self.cookies = cookies;
        self
    }

    /// Set the gate path policy
    pub fn with_gate_policy(mut self, policy: GatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the token identifier prefix in the revocation store
    pub fn with_revocation_namespace(mut self, namespace: RevocationNamespace) -> Self {
        self.namespace = namespace;
        self
    }

    /// Build the state
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if any required adapter is
    /// not provided
    pub fn try_build(self) -> Result<AppState, BuilderError> {
        let tokens = self
            .tokens
            .ok_or(BuilderError::MissingDependency("token service"))?;
        let store = self
            .store
            .ok_or(BuilderError::MissingDependency("revocation store"))?;
        let users = self
            .users
            .ok_or(BuilderError::MissingDependency("user directory"))?;
        let passwords = self
            .passwords
            .ok_or(BuilderError::MissingDependency("password verifier"))?;
        let errors = self
            .errors
            .unwrap_or_else(|| Arc::new(TracingErrorSink));

        let sessions = Arc::new(SessionManager::new(
            Arc::clone(&tokens),
            store,
            self.cookies,
            self.namespace,
        ));
        let login = Arc::new(LoginService::new(users, passwords, Arc::clone(&sessions)));
        let gate = Arc::new(RequestGate::new(
            StructuralVerifier::new(tokens),
            self.policy,
        ));

        Ok(AppState {
            sessions,
            login,
            gate,
            errors,
        })
    }
}

/// Errors that can occur while building the state
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
