//! Page entry points
//!
//! Minimal text pages standing in for the rendered application. What
//! matters is the checks each one performs on entry.

use crate::cookies::JarCookies;
use crate::state::AppState;
use axum::Extension;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use hsa_application::SessionStatus;
use hsa_domain::value_objects::ClaimSet;

/// `GET /app`
///
/// The gate only checked the token structurally. Entry re-runs the
/// authoritative check so a revoked session never renders.
///
/// A store outage answers 503 and keeps the cookies. Redirecting would
/// bounce between here and the login page, which sends structurally valid
/// sessions back to the app.
pub async fn app_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let mut jar = JarCookies::new(jar, state.sessions.cookie_settings().path.clone());

    match state.sessions.session_status(&mut jar).await {
        SessionStatus::Authenticated(user) => {
            (jar.into_inner(), format!("Welcome back, {}", user.name)).into_response()
        }
        SessionStatus::Unavailable => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Session check unavailable, try again shortly",
        )
            .into_response(),
        SessionStatus::Unauthenticated => {
            // A mismatched profile leaves the pair in place; drop it so the
            // login page renders instead of redirecting back here
            state.sessions.clear(&mut jar);
            let policy = state.gate.policy();
            (
                jar.into_inner(),
                Redirect::temporary(&policy.absolute(&policy.login_path)),
            )
                .into_response()
        }
    }
}

/// `GET /admin`
pub async fn admin_page(Extension(claims): Extension<ClaimSet>) -> String {
    format!("Administration ({})", claims.email)
}

/// `GET /login`
pub async fn login_page() -> &'static str {
    "Sign in"
}

/// `GET /access-denied`
pub async fn access_denied_page() -> impl IntoResponse {
    (StatusCode::FORBIDDEN, "Access denied")
}
