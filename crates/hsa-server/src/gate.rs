//! Request gate middleware
//!
//! Runs [`RequestGate::evaluate`](hsa_application::RequestGate::evaluate)
//! in front of every route and turns the decision into a response.
//! Admitted requests get the resolved path in the configured header and,
//! on protected paths, the verified claims as a request extension.

use crate::cookies::JarCookies;
use crate::models::GateDenial;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use hsa_application::{DenyStatus, GateOutcome, GateRequest};
use hsa_domain::ports::SessionCookieStore;
use hsa_domain::value_objects::GatePolicy;
use tracing::debug;

/// Gate middleware, installed with `axum::middleware::from_fn_with_state`
pub async fn gate_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let settings = state.sessions.cookie_settings();
    let mut cookies = JarCookies::new(jar, settings.path.clone());

    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);
    let token = cookies.get(&settings.token_name);

    let decision = state.gate.evaluate(&GateRequest {
        path: &path,
        query: query.as_deref(),
        token: token.as_deref(),
    });

    if decision.clear_session {
        state.sessions.clear(&mut cookies);
    }
    let jar = cookies.into_inner();
    let policy = state.gate.policy();

    match decision.outcome {
        GateOutcome::Admitted { claims } => {
            insert_current_path(&mut request, policy, &path);
            if let Some(claims) = claims {
                request.extensions_mut().insert(claims);
            }
            (jar, next.run(request).await).into_response()
        }
        GateOutcome::Denied(status) => (jar, denial(status)).into_response(),
        GateOutcome::RedirectToLogin { return_to } => {
            let target = format!(
                "{}?redirect={}",
                policy.login_path,
                urlencoding::encode(&return_to)
            );
            (jar, Redirect::temporary(&policy.absolute(&target))).into_response()
        }
        GateOutcome::RedirectToApp => {
            (jar, Redirect::temporary(&policy.absolute(&policy.app_path))).into_response()
        }
        GateOutcome::RedirectToAccessDenied => (
            jar,
            Redirect::temporary(&policy.absolute(&policy.access_denied_path)),
        )
            .into_response(),
    }
}

fn denial(status: DenyStatus) -> Response {
    let code = match status {
        DenyStatus::Unauthorized => StatusCode::UNAUTHORIZED,
        DenyStatus::Forbidden => StatusCode::FORBIDDEN,
    };
    let body = GateDenial {
        success: false,
        message: status.message().to_string(),
    };
    (code, Json(body)).into_response()
}

fn insert_current_path(request: &mut Request, policy: &GatePolicy, path: &str) {
    match (
        HeaderName::from_bytes(policy.current_path_header.as_bytes()),
        HeaderValue::from_str(path),
    ) {
        (Ok(name), Ok(value)) => {
            request.headers_mut().insert(name, value);
        }
        _ => debug!(header = %policy.current_path_header, "Current path header not set"),
    }
}
