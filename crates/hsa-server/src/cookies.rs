//! Session cookie port over `axum_extra`'s cookie jar
//!
//! Values are handed to the jar as-is. The jar percent-encodes them once
//! when writing `Set-Cookie` and decodes incoming cookies, so the profile
//! cookie reads back as JSON after a single `decodeURIComponent`.

use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use hsa_domain::ports::SessionCookieStore;
use hsa_domain::value_objects::{SameSitePolicy, SessionCookie};

/// Request cookie jar adapted to [`SessionCookieStore`]
///
/// Handlers wrap the extracted jar, pass it to the session manager, and
/// return [`JarCookies::into_inner`] with the response so the changes are
/// written as `Set-Cookie` headers.
#[derive(Debug, Clone)]
pub struct JarCookies {
    jar: CookieJar,
    path: String,
}

impl JarCookies {
    /// Wrap a jar; removals are issued for `path`
    pub fn new(jar: CookieJar, path: impl Into<String>) -> Self {
        Self {
            jar,
            path: path.into(),
        }
    }

    /// The jar with every change applied
    pub fn into_inner(self) -> CookieJar {
        self.jar
    }
}

fn same_site(policy: SameSitePolicy) -> SameSite {
    match policy {
        SameSitePolicy::Strict => SameSite::Strict,
        SameSitePolicy::Lax => SameSite::Lax,
    }
}

impl SessionCookieStore for JarCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.jar.get(name).map(|cookie| cookie.value().to_string())
    }

    fn set(&mut self, cookie: SessionCookie) {
        let max_age = i64::try_from(cookie.max_age_secs).unwrap_or(i64::MAX);
        let built = Cookie::build((cookie.name, cookie.value))
            .http_only(cookie.http_only)
            .secure(cookie.secure)
            .same_site(same_site(cookie.same_site))
            .path(cookie.path)
            .max_age(time::Duration::seconds(max_age))
            .build();
        self.jar = self.jar.clone().add(built);
    }

    fn remove(&mut self, name: &str) {
        let removal = Cookie::build((name.to_string(), "")).path(self.path.clone());
        self.jar = self.jar.clone().remove(removal);
    }
}
