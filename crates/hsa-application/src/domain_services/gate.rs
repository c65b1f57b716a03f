//! Request gate
//!
//! Decides, per request, whether to admit, deny or redirect based on the
//! path policy and the structural validity of the token cookie. The gate
//! never touches the revocation store, so a revoked but unexpired token is
//! admitted here and rejected by the authoritative check at the
//! destination.
//!
//! | Situation | API path | Page path |
//! |-----------|----------|-----------|
//! | not protected | admit | admit |
//! | no token | 401 + clear | login redirect + clear |
//! | invalid token | 401 + clear | login redirect + clear |
//! | missing role | 403 | access-denied redirect |
//! | valid | admit | admit |
//!
//! The login page is handled first: a valid token redirects to the app, an
//! invalid one is cleared and the page renders.

use crate::domain_services::verification::StructuralVerifier;
use hsa_domain::value_objects::{ClaimSet, GatePolicy};
use tracing::debug;

/// One inbound request as the gate sees it
#[derive(Debug, Clone, Copy)]
pub struct GateRequest<'a> {
    /// Request path without query
    pub path: &'a str,
    /// Raw query string, without `?`
    pub query: Option<&'a str>,
    /// Value of the token cookie
    pub token: Option<&'a str>,
}

/// Status for denied API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyStatus {
    /// No valid session (401)
    Unauthorized,
    /// Valid session without the required role (403)
    Forbidden,
}

impl DenyStatus {
    /// HTTP status code
    pub fn code(self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
        }
    }

    /// Body message
    pub fn message(self) -> &'static str {
        match self {
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
        }
    }
}

/// What to do with the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Pass to the handler; claims are present when the path was protected
    Admitted {
        /// Verified claims
        claims: Option<ClaimSet>,
    },
    /// Answer with a status code
    Denied(DenyStatus),
    /// Send to the login page, then back to `return_to`
    RedirectToLogin {
        /// Original path and query
        return_to: String,
    },
    /// Already signed in, skip the login page
    RedirectToApp,
    /// Signed in without the required role
    RedirectToAccessDenied,
}

/// Outcome plus whether the session cookie pair must be cleared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    /// What to do
    pub outcome: GateOutcome,
    /// Delete both session cookies on the response
    pub clear_session: bool,
}

impl GateDecision {
    fn admit(claims: Option<ClaimSet>) -> Self {
        Self {
            outcome: GateOutcome::Admitted { claims },
            clear_session: false,
        }
    }

    fn clearing(outcome: GateOutcome) -> Self {
        Self {
            outcome,
            clear_session: true,
        }
    }

    fn keeping(outcome: GateOutcome) -> Self {
        Self {
            outcome,
            clear_session: false,
        }
    }
}

/// Path-policy gate over structural verification
#[derive(Debug, Clone)]
pub struct RequestGate {
    verifier: StructuralVerifier,
    policy: GatePolicy,
}

impl RequestGate {
    /// Create a gate
    pub fn new(verifier: StructuralVerifier, policy: GatePolicy) -> Self {
        Self { verifier, policy }
    }

    /// Policy in force
    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// Decide what happens to `request`
    pub fn evaluate(&self, request: &GateRequest<'_>) -> GateDecision {
        let path = request.path;

        if self.policy.is_login_path(path) {
            return match request.token {
                None => GateDecision::admit(None),
                Some(token) => match self.verifier.verify_structural(token) {
                    Some(_) => GateDecision::keeping(GateOutcome::RedirectToApp),
                    None => GateDecision {
                        outcome: GateOutcome::Admitted { claims: None },
                        clear_session: true,
                    },
                },
            };
        }

        if !self.policy.is_protected(path) {
            return GateDecision::admit(None);
        }

        let is_api = self.policy.is_api_path(path);
        let unauthenticated = || {
            if is_api {
                GateOutcome::Denied(DenyStatus::Unauthorized)
            } else {
                GateOutcome::RedirectToLogin {
                    return_to: GatePolicy::return_target(path, request.query),
                }
            }
        };

        let Some(token) = request.token else {
            debug!(path, "No session on protected path");
            return GateDecision::clearing(unauthenticated());
        };

        let Some(claims) = self.verifier.verify_structural(token) else {
            debug!(path, "Invalid session on protected path");
            return GateDecision::clearing(unauthenticated());
        };

        if let Some(role) = self.policy.required_role(path)
            && !claims.has_role(role)
        {
            debug!(path, sub = %claims.sub, role, "Missing role");
            return GateDecision::keeping(if is_api {
                GateOutcome::Denied(DenyStatus::Forbidden)
            } else {
                GateOutcome::RedirectToAccessDenied
            });
        }

        GateDecision::admit(Some(claims))
    }
}
