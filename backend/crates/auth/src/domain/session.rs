//! Logto Session
//!
//! Everything the gateway remembers about a browser between requests. The
//! whole struct is serialized into the signed session cookie.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use platform::crypto::{random_token, sha256, to_base64url};
use serde::{Deserialize, Serialize};

/// How long a started sign-in may wait for its callback, in seconds
pub const PENDING_SIGN_IN_TTL_SECS: i64 = 600;

/// Key of the access token issued without an explicit resource
pub const DEFAULT_RESOURCE: &str = "";

/// Sign-in started but not yet completed by the callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSignIn {
    /// CSRF state echoed back by the provider
    pub state: String,
    /// PKCE verifier, sent only at code exchange
    pub code_verifier: String,
    pub redirect_uri: String,
    /// Unix timestamp (seconds)
    pub created_at: i64,
}

impl PendingSignIn {
    pub fn new(redirect_uri: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            state: random_token(32),
            code_verifier: random_token(48),
            redirect_uri: redirect_uri.into(),
            created_at: now.timestamp(),
        }
    }

    /// PKCE S256 challenge for [`Self::code_verifier`]
    pub fn code_challenge(&self) -> String {
        to_base64url(&sha256(self.code_verifier.as_bytes()))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() - self.created_at > PENDING_SIGN_IN_TTL_SECS
    }
}

/// Access token with its absolute expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,
    /// Unix timestamp (seconds)
    pub expires_at: i64,
}

impl AccessToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.expires_at
    }
}

/// Token endpoint response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
    #[serde(default)]
    pub scope: Option<String>,
}

fn default_expires_in() -> i64 {
    3600
}

/// Stored session state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogtoSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<PendingSignIn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub access_tokens: BTreeMap<String, AccessToken>,
}

impl LogtoSession {
    /// Fresh session holding only the pending sign-in; earlier tokens are dropped.
    pub fn begin_sign_in(pending: PendingSignIn) -> Self {
        Self {
            pending: Some(pending),
            ..Self::default()
        }
    }

    /// Store tokens from a successful code exchange and forget the pending sign-in.
    pub fn complete_sign_in(&mut self, tokens: TokenSet, now: DateTime<Utc>) {
        self.pending = None;
        self.id_token = tokens.id_token;
        self.refresh_token = tokens.refresh_token;
        self.access_tokens.clear();
        self.access_tokens.insert(
            DEFAULT_RESOURCE.to_string(),
            AccessToken {
                token: tokens.access_token,
                expires_at: (now + Duration::seconds(tokens.expires_in)).timestamp(),
            },
        );
    }

    /// Signed in iff an ID token is held
    pub fn is_authenticated(&self) -> bool {
        self.id_token.is_some()
    }

    /// Unexpired access token for `resource` (`None` = the default token)
    pub fn access_token_at(&self, resource: Option<&str>, now: DateTime<Utc>) -> Option<String> {
        self.access_tokens
            .get(resource.unwrap_or(DEFAULT_RESOURCE))
            .filter(|token| !token.is_expired(now))
            .map(|token| token.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> TokenSet {
        TokenSet {
            access_token: "at-1".to_string(),
            id_token: Some("h.p.s".to_string()),
            refresh_token: Some("rt-1".to_string()),
            expires_in: 60,
            scope: Some("openid profile".to_string()),
        }
    }

    #[test]
    fn test_pending_sign_in_expiry() {
        let now = Utc::now();
        let pending = PendingSignIn::new("http://localhost:3000/api/logto/callback", now);

        assert!(!pending.is_expired(now + Duration::minutes(9)));
        assert!(pending.is_expired(now + Duration::minutes(11)));
    }

    #[test]
    fn test_code_challenge_is_s256_of_verifier() {
        let pending = PendingSignIn {
            state: "s".to_string(),
            code_verifier: "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk".to_string(),
            redirect_uri: "http://localhost/cb".to_string(),
            created_at: 0,
        };
        // RFC 7636 appendix B
        assert_eq!(
            pending.code_challenge(),
            "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
        );
    }

    #[test]
    fn test_complete_sign_in_stores_tokens() {
        let now = Utc::now();
        let pending = PendingSignIn::new("http://localhost/cb", now);
        let mut session = LogtoSession::begin_sign_in(pending);
        assert!(!session.is_authenticated());

        session.complete_sign_in(tokens(), now);

        assert!(session.pending.is_none());
        assert!(session.is_authenticated());
        assert_eq!(session.access_token_at(None, now), Some("at-1".to_string()));
        assert_eq!(session.access_token_at(Some("https://api.example.com"), now), None);
    }

    #[test]
    fn test_expired_access_token_is_not_returned() {
        let now = Utc::now();
        let mut session = LogtoSession::default();
        session.complete_sign_in(tokens(), now);

        assert_eq!(session.access_token_at(None, now + Duration::seconds(61)), None);
    }
}
