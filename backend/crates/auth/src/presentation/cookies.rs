//! Response Cookie Jar
//!
//! [`CookieStore`] over the request's `Cookie` headers, collecting the
//! `Set-Cookie` deletions to send back.

use axum::http::{HeaderMap, HeaderValue};
use platform::cookie::{CookieConfig, parse_cookies};

use crate::domain::cookie_store::{CookieStore, CookieStoreError};

pub struct ResponseCookies {
    sent: Vec<String>,
    attributes: CookieConfig,
    set_cookies: Vec<HeaderValue>,
}

impl ResponseCookies {
    /// Deletions reuse `attributes` (path, flags) with each cookie's own name.
    pub fn from_headers(headers: &HeaderMap, attributes: &CookieConfig) -> Self {
        Self {
            sent: parse_cookies(headers).into_iter().map(|c| c.name).collect(),
            attributes: attributes.clone(),
            set_cookies: Vec::new(),
        }
    }

    pub fn into_set_cookies(self) -> Vec<HeaderValue> {
        self.set_cookies
    }
}

impl CookieStore for ResponseCookies {
    fn names(&self) -> Vec<String> {
        self.sent.clone()
    }

    fn delete(&mut self, name: &str) -> Result<(), CookieStoreError> {
        let value = self
            .attributes
            .with_name(name)
            .delete_cookie_header()
            .map_err(|e| CookieStoreError::Delete {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        self.set_cookies.push(value);
        Ok(())
    }
}
