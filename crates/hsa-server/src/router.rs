//! Route table

use crate::gate::gate_middleware;
use crate::handlers::admin::revoke_session_handler;
use crate::handlers::auth::{login_handler, logout_handler, session_handler};
use crate::handlers::pages::{access_denied_page, admin_page, app_page, login_page};
use crate::state::AppState;
use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post};
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// The gate runs in front of every route below; the trace layer wraps
/// everything.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Auth API
        .route("/api/v1/auth", get(session_handler))
        .route("/api/v1/auth/login", post(login_handler))
        .route("/api/v1/auth/logout", get(logout_handler).post(logout_handler))
        // Admin API
        .route("/api/admin/sessions/{jti}", delete(revoke_session_handler))
        // Pages
        .route("/login", get(login_page))
        .route("/access-denied", get(access_denied_page))
        .route("/app", get(app_page))
        .route("/admin", get(admin_page))
        .layer(middleware::from_fn_with_state(state.clone(), gate_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
