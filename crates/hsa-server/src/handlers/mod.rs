//! HTTP handlers
//!
//! - [`auth`]: login, logout and session-check endpoints
//! - [`pages`]: page entry points behind the gate
//! - [`admin`]: forced session revocation

pub mod admin;
pub mod auth;
pub mod pages;

use crate::models::ApiResponse;
use crate::state::AppState;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hsa_domain::error::{DomainError, Error};

/// Status for an error returned by the login flow
pub fn error_status(err: &Error) -> StatusCode {
    match err.as_domain() {
        Some(DomainError::UserNotFound | DomainError::InvalidPassword) => StatusCode::UNAUTHORIZED,
        Some(DomainError::InvalidRequestBody) => StatusCode::BAD_REQUEST,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `{success:false, error}` with the allow-listed message
///
/// Errors outside the allow-list go to the error sink in full first.
pub fn error_response(state: &AppState, err: &Error) -> Response {
    if !err.is_client_visible() {
        state.errors.log_error(err);
    }
    (error_status(err), Json(ApiResponse::error(err.client_message()))).into_response()
}
