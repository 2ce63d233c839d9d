//! Manual Sign Out Use Case
//!
//! Fallback sign-out that does not involve the provider: every cookie that
//! could hold session state is deleted outright.

use crate::domain::cookie_store::CookieStore;
use crate::error::AuthResult;

/// Cookie names always deleted, whether or not the client sent them
pub const FIXED_SESSION_COOKIES: [&str; 5] = [
    "logto_session",
    "logto_access_token",
    "logto_id_token",
    "logto_refresh_token",
    "next-auth.session-token",
];

/// Substrings that mark a request cookie as session-related (case-sensitive)
pub const SESSION_COOKIE_MARKERS: [&str; 2] = ["logto", "auth"];

pub fn is_session_cookie(name: &str) -> bool {
    SESSION_COOKIE_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
}

pub struct ManualSignOutUseCase;

impl ManualSignOutUseCase {
    /// Delete the fixed names plus every matching request cookie.
    ///
    /// Returns the deleted names, each once. Stops at the first failure.
    pub fn execute<C>(store: &mut C) -> AuthResult<Vec<String>>
    where
        C: CookieStore,
    {
        let mut targets: Vec<String> = FIXED_SESSION_COOKIES
            .iter()
            .map(|name| name.to_string())
            .collect();

        for name in store.names() {
            if is_session_cookie(&name) && !targets.contains(&name) {
                targets.push(name);
            }
        }

        for name in &targets {
            store.delete(name)?;
        }

        tracing::debug!(cookies = ?targets, "Session cookies deleted");
        Ok(targets)
    }
}
