//! Session Cookie Codec
//!
//! Cookie value format: `base64url(json(session)) "." base64url(hmac_sha256(payload))`.
//! The payload is readable by the client; integrity only, not confidentiality.

use axum::http::{HeaderMap, HeaderValue};
use platform::cookie::{CookieConfig, extract_cookie};
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

use crate::application::config::LogtoConfig;
use crate::domain::session::LogtoSession;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone)]
pub struct SessionCookieCodec {
    key: [u8; 32],
    cookie: CookieConfig,
}

impl SessionCookieCodec {
    pub fn new(config: &LogtoConfig) -> Self {
        Self {
            key: config.cookie_key,
            cookie: CookieConfig {
                name: config.session_cookie_name(),
                secure: config.cookie_secure,
                http_only: true,
                same_site: config.cookie_same_site,
                path: "/".to_string(),
                max_age_secs: Some(config.session_ttl_secs()),
            },
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie.name
    }

    /// Cookie attributes, for deleting sibling cookies with matching flags
    pub fn cookie_attributes(&self) -> &CookieConfig {
        &self.cookie
    }

    pub fn encode(&self, session: &LogtoSession) -> AuthResult<String> {
        let json = serde_json::to_vec(session)
            .map_err(|e| AuthError::Internal(format!("Session serialization failed: {e}")))?;
        let payload = to_base64url(&json);
        let signature = to_base64url(&hmac_sha256(&self.key, payload.as_bytes()));
        Ok(format!("{payload}.{signature}"))
    }

    /// `None` for anything that is not a session we signed.
    pub fn decode(&self, value: &str) -> Option<LogtoSession> {
        let (payload, signature) = value.split_once('.')?;
        let signature = from_base64url(signature).ok()?;

        if !verify_hmac_sha256(&self.key, payload.as_bytes(), &signature) {
            tracing::debug!(cookie = %self.cookie.name, "Session cookie signature mismatch");
            return None;
        }

        let json = from_base64url(payload).ok()?;
        serde_json::from_slice(&json)
            .inspect_err(|e| tracing::debug!(error = %e, "Session cookie payload unreadable"))
            .ok()
    }

    /// Session from the request cookies, if present and valid
    pub fn read(&self, headers: &HeaderMap) -> Option<LogtoSession> {
        extract_cookie(headers, &self.cookie.name).and_then(|value| self.decode(&value))
    }

    /// `Set-Cookie` storing `session`
    pub fn set_cookie(&self, session: &LogtoSession) -> AuthResult<HeaderValue> {
        let value = self.encode(session)?;
        self.cookie
            .set_cookie_header(&value)
            .map_err(|e| AuthError::Internal(format!("Invalid session cookie header: {e}")))
    }

    /// `Set-Cookie` deleting the session
    pub fn clear_cookie(&self) -> AuthResult<HeaderValue> {
        self.cookie
            .delete_cookie_header()
            .map_err(|e| AuthError::Internal(format!("Invalid session cookie header: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::{PendingSignIn, TokenSet};
    use axum::http::header;
    use chrono::Utc;

    fn config() -> LogtoConfig {
        LogtoConfig {
            app_id: "app-1".to_string(),
            ..LogtoConfig::development()
        }
    }

    fn signed_in_session() -> LogtoSession {
        let mut session = LogtoSession::begin_sign_in(PendingSignIn::new("http://x/cb", Utc::now()));
        session.complete_sign_in(
            TokenSet {
                access_token: "at".to_string(),
                id_token: Some("a.b.c".to_string()),
                refresh_token: None,
                expires_in: 3600,
                scope: None,
            },
            Utc::now(),
        );
        session
    }

    #[test]
    fn test_encode_decode() {
        let codec = SessionCookieCodec::new(&config());
        let session = signed_in_session();

        let value = codec.encode(&session).unwrap();
        assert_eq!(codec.decode(&value), Some(session));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let codec = SessionCookieCodec::new(&config());
        let value = codec.encode(&signed_in_session()).unwrap();
        let (_, signature) = value.split_once('.').unwrap();

        let forged_payload = to_base64url(br#"{"id_token":"forged.jwt.here"}"#);
        assert_eq!(codec.decode(&format!("{forged_payload}.{signature}")), None);
        assert_eq!(codec.decode("no-dot"), None);
    }

    #[test]
    fn test_other_key_rejected() {
        let value = SessionCookieCodec::new(&config())
            .encode(&signed_in_session())
            .unwrap();
        // development() draws a fresh random key each time
        assert_eq!(SessionCookieCodec::new(&config()).decode(&value), None);
    }

    #[test]
    fn test_read_from_headers() {
        let codec = SessionCookieCodec::new(&config());
        let session = signed_in_session();
        let cookie = format!("theme=dark; logto_app-1={}", codec.encode(&session).unwrap());

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(&cookie).unwrap());

        assert_eq!(codec.read(&headers), Some(session));
        assert_eq!(codec.read(&HeaderMap::new()), None);
    }

    #[test]
    fn test_set_and_clear_cookie_attributes() {
        let codec = SessionCookieCodec::new(&config());

        let set = codec.set_cookie(&LogtoSession::default()).unwrap();
        let set = set.to_str().unwrap();
        assert!(set.starts_with("logto_app-1="));
        assert!(set.contains("HttpOnly"));
        assert!(set.contains("Max-Age=1209600"));

        let clear = codec.clear_cookie().unwrap();
        assert!(clear.to_str().unwrap().contains("Max-Age=0"));
    }
}
