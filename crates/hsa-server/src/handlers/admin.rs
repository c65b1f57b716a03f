//! Admin API handlers

use super::error_response;
use crate::models::RevokeResponse;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use hsa_domain::value_objects::ClaimSet;
use tracing::info;

/// `DELETE /api/admin/sessions/{jti}`
///
/// Forced logout of any session by token identifier. The gate has already
/// required the admin role.
pub async fn revoke_session_handler(
    State(state): State<AppState>,
    Extension(claims): Extension<ClaimSet>,
    Path(jti): Path<String>,
) -> Response {
    match state.sessions.revoke(&jti).await {
        Ok(revoked) => {
            info!(admin = %claims.sub, jti, revoked, "Forced revocation");
            Json(RevokeResponse {
                success: true,
                revoked,
            })
            .into_response()
        }
        Err(e) => error_response(&state, &e),
    }
}
