//! In-memory cookie jar
//!
//! A [`SessionCookieStore`] over plain maps, for callers that are not
//! behind an HTTP stack and for tests. Reads see writes and removals made
//! earlier in the same exchange, like a response being built on top of a
//! request.

use hsa_domain::ports::SessionCookieStore;
use hsa_domain::value_objects::SessionCookie;
use std::collections::{HashMap, HashSet};

/// Cookie jar backed by maps
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    incoming: HashMap<String, String>,
    written: HashMap<String, SessionCookie>,
    removed: HashSet<String>,
}

impl MemoryCookieJar {
    /// Empty jar
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar with a cookie sent by the client
    #[must_use]
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.incoming.insert(name.into(), value.into());
        self
    }

    /// Cookie written during this exchange
    pub fn written(&self, name: &str) -> Option<&SessionCookie> {
        self.written.get(name)
    }

    /// Whether `name` was expired during this exchange
    pub fn was_removed(&self, name: &str) -> bool {
        self.removed.contains(name)
    }

    /// Carry written cookies over as the next request's cookies
    #[must_use]
    pub fn next_request(&self) -> Self {
        let mut incoming: HashMap<String, String> = self
            .incoming
            .iter()
            .filter(|(name, _)| !self.removed.contains(*name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        for (name, cookie) in &self.written {
            incoming.insert(name.clone(), cookie.value.clone());
        }
        Self {
            incoming,
            ..Self::default()
        }
    }
}

impl SessionCookieStore for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        if let Some(cookie) = self.written.get(name) {
            return Some(cookie.value.clone());
        }
        if self.removed.contains(name) {
            return None;
        }
        self.incoming.get(name).cloned()
    }

    fn set(&mut self, cookie: SessionCookie) {
        self.removed.remove(&cookie.name);
        self.written.insert(cookie.name.clone(), cookie);
    }

    fn remove(&mut self, name: &str) {
        self.written.remove(name);
        self.removed.insert(name.to_string());
    }
}
