//! Auth API handlers

use super::error_response;
use crate::cookies::JarCookies;
use crate::models::{ApiResponse, LoginRequest, SessionResponse};
use crate::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use hsa_application::LoginCredentials;
use tracing::{debug, info};

fn cookies(state: &AppState, jar: CookieJar) -> JarCookies {
    JarCookies::new(jar, state.sessions.cookie_settings().path.clone())
}

/// `POST /api/v1/auth/login`
///
/// The body is parsed by hand so that any malformed payload answers 400
/// with the allow-listed message rather than the extractor's rejection.
pub async fn login_handler(State(state): State<AppState>, jar: CookieJar, body: Bytes) -> Response {
    let request = match LoginRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => return error_response(&state, &e),
    };

    let credentials = LoginCredentials::new(request.email, request.password);
    let mut jar = cookies(&state, jar);

    match state.login.login(&credentials, &mut jar).await {
        Ok(user) => {
            info!(user = %user.id, "Login succeeded");
            (jar.into_inner(), Json(ApiResponse::with_user(user))).into_response()
        }
        Err(e) => {
            debug!(email = %credentials.email, error = %e, "Login failed");
            error_response(&state, &e)
        }
    }
}

/// `GET|POST /api/v1/auth/logout`
///
/// Always succeeds; store failures are logged by the session manager and
/// the cookie pair is cleared regardless.
pub async fn logout_handler(State(state): State<AppState>, jar: CookieJar) -> Response {
    let mut jar = cookies(&state, jar);
    let outcome = state.sessions.logout(&mut jar).await;
    debug!(had_token = outcome.had_token, revoked = outcome.revoked, "Logout");

    (jar.into_inner(), Json(ApiResponse::success())).into_response()
}

/// `GET /api/v1/auth`
pub async fn session_handler(State(state): State<AppState>, jar: CookieJar) -> Response {
    let mut jar = cookies(&state, jar);
    let user = state.sessions.validated_session(&mut jar).await;

    (jar.into_inner(), Json(SessionResponse::from(user))).into_response()
}
