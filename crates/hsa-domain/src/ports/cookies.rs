//! Session Cookie Port
//!
//! The session manager reads and writes the cookie pair through this trait.
//! The server wraps the request's cookie jar in it; tests use a plain map.

use crate::value_objects::SessionCookie;

/// Read/write access to the cookies of one request/response exchange
pub trait SessionCookieStore: Send {
    /// Value of the named cookie, decoded
    fn get(&self, name: &str) -> Option<String>;

    /// Add or replace a cookie on the response
    fn set(&mut self, cookie: SessionCookie);

    /// Expire a cookie on the response
    fn remove(&mut self, name: &str);
}
