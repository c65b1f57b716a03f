//! Domain services

pub mod gate;
pub mod verification;

pub use gate::{DenyStatus, GateDecision, GateOutcome, GateRequest, RequestGate};
pub use verification::{AuthoritativeVerifier, StructuralVerifier};
