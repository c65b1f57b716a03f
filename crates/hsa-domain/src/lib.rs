//! # Domain Layer
//!
//! Core types and contracts for Hybrid Session Auth: signed claim sets,
//! the session cookie pair, path policy for the request gate, the error
//! taxonomy, and the ports every adapter implements.
//!
//! This crate has no I/O and no crypto. Signing, storage and transport live
//! behind the traits in [`ports`].

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{DomainError, Error, Result, VerificationFailure};
