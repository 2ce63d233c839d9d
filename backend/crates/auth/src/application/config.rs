//! Application Configuration
//!
//! Environment loading and the Logto configuration derived from it.
//!
//! [`EnvConfig`] is read once at startup and fails fast on missing required
//! variables. [`LogtoConfig`] is the server-side view (secrets included);
//! [`LogtoClientConfig`] is what may be shown to a browser (no secrets).

use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use platform::crypto::{random_bytes, sha256};
use reqwest::Url;
use serde::Serialize;
use thiserror::Error;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PORT: u16 = 3000;

/// Scopes Logto always needs; prepended to the configured ones
pub const RESERVED_SCOPES: [&str; 2] = ["openid", "offline_access"];

/// Configuration failures; all of them stop startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Environment variable {var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("Environment variable {var} is not a valid port: {value}")]
    InvalidPort { var: &'static str, value: String },
}

/// Deployment mode from `NODE_ENV`. Anything but `production` is development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeEnv {
    #[default]
    Development,
    Production,
}

impl RuntimeEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("production") => RuntimeEnv::Production,
            _ => RuntimeEnv::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, RuntimeEnv::Production)
    }
}

/// Raw, validated environment
#[derive(Clone)]
pub struct EnvConfig {
    /// `NEXT_PUBLIC_TURING_API`
    pub api_base_url: String,
    /// `LOGTO_ENDPOINT`
    pub logto_endpoint: String,
    /// `LOGTO_APP_ID`
    pub logto_app_id: String,
    /// `LOGTO_APP_SECRET`
    pub logto_app_secret: String,
    /// `NEXTAUTH_URL`
    pub base_url: String,
    /// `NEXTAUTH_SECRET`
    pub cookie_secret: Option<String>,
    /// `NODE_ENV`
    pub runtime_env: RuntimeEnv,
    /// `NEXT_PUBLIC_LOGTO_ENDPOINT`, falling back to `LOGTO_ENDPOINT`
    pub public_logto_endpoint: String,
    /// `NEXT_PUBLIC_LOGTO_APP_ID`, falling back to `LOGTO_APP_ID`
    pub public_logto_app_id: String,
    /// `PORT`
    pub port: u16,
}

impl fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConfig")
            .field("api_base_url", &self.api_base_url)
            .field("logto_endpoint", &self.logto_endpoint)
            .field("logto_app_id", &self.logto_app_id)
            .field("logto_app_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("cookie_secret", &self.cookie_secret.as_ref().map(|_| "<redacted>"))
            .field("runtime_env", &self.runtime_env)
            .field("port", &self.port)
            .finish()
    }
}

impl EnvConfig {
    /// Read from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let api_base_url = parse_url("NEXT_PUBLIC_TURING_API", require("NEXT_PUBLIC_TURING_API")?)?;
        let logto_endpoint = parse_url("LOGTO_ENDPOINT", require("LOGTO_ENDPOINT")?)?;
        let logto_app_id = require("LOGTO_APP_ID")?;
        let logto_app_secret = require("LOGTO_APP_SECRET")?;

        let base_url = parse_url(
            "NEXTAUTH_URL",
            get("NEXTAUTH_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        )?;

        let public_logto_endpoint = match get("NEXT_PUBLIC_LOGTO_ENDPOINT") {
            Some(value) => parse_url("NEXT_PUBLIC_LOGTO_ENDPOINT", value)?,
            None => logto_endpoint.clone(),
        };
        let public_logto_app_id =
            get("NEXT_PUBLIC_LOGTO_APP_ID").unwrap_or_else(|| logto_app_id.clone());

        let port = match get("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                var: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_base_url,
            logto_endpoint,
            logto_app_id,
            logto_app_secret,
            base_url,
            cookie_secret: get("NEXTAUTH_SECRET"),
            runtime_env: RuntimeEnv::parse(get("NODE_ENV").as_deref()),
            public_logto_endpoint,
            public_logto_app_id,
            port,
        })
    }

    /// Server-side Logto configuration, secrets included
    pub fn server_config(&self) -> LogtoConfig {
        let cookie_key = match &self.cookie_secret {
            Some(secret) => sha256(secret.as_bytes()),
            None => {
                tracing::warn!(
                    "NEXTAUTH_SECRET is not set; sessions will not survive a restart"
                );
                random_key()
            }
        };

        LogtoConfig {
            endpoint: self.logto_endpoint.clone(),
            app_id: self.logto_app_id.clone(),
            app_secret: Some(self.logto_app_secret.clone()),
            base_url: self.base_url.clone(),
            cookie_key,
            cookie_secure: self.runtime_env.is_production(),
            scopes: default_scopes(),
            resources: BTreeSet::from([self.api_base_url.clone()]),
            ..LogtoConfig::default()
        }
    }

    /// Browser-safe Logto configuration
    pub fn client_config(&self) -> LogtoClientConfig {
        LogtoClientConfig {
            endpoint: self.public_logto_endpoint.clone(),
            app_id: self.public_logto_app_id.clone(),
            scopes: default_scopes(),
            resources: BTreeSet::from([self.api_base_url.clone()]),
        }
    }
}

/// Server-side Logto configuration
#[derive(Clone)]
pub struct LogtoConfig {
    /// Logto tenant endpoint, no trailing slash
    pub endpoint: String,
    pub app_id: String,
    pub app_secret: Option<String>,
    /// Public URL of this app, no trailing slash
    pub base_url: String,
    /// HMAC key for the session cookie
    pub cookie_key: [u8; 32],
    pub cookie_secure: bool,
    pub cookie_same_site: SameSite,
    /// Session cookie lifetime
    pub session_ttl: Duration,
    pub scopes: BTreeSet<String>,
    pub resources: BTreeSet<String>,
}

impl fmt::Debug for LogtoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogtoConfig")
            .field("endpoint", &self.endpoint)
            .field("app_id", &self.app_id)
            .field("app_secret", &self.app_secret.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("cookie_secure", &self.cookie_secure)
            .field("scopes", &self.scopes)
            .field("resources", &self.resources)
            .finish_non_exhaustive()
    }
}

impl Default for LogtoConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3001".to_string(),
            app_id: String::new(),
            app_secret: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            cookie_key: [0u8; 32],
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            session_ttl: Duration::from_secs(14 * 24 * 3600), // 14 days
            scopes: default_scopes(),
            resources: BTreeSet::new(),
        }
    }
}

impl LogtoConfig {
    /// Create config for development (random cookie key, insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_key: random_key(),
            cookie_secure: false,
            ..Self::default()
        }
    }

    /// Name of the signed session cookie
    pub fn session_cookie_name(&self) -> String {
        format!("logto_{}", self.app_id)
    }

    pub fn redirect_uri(&self) -> String {
        format!("{}/api/logto/callback", self.base_url)
    }

    pub fn post_logout_redirect_uri(&self) -> String {
        self.base_url.clone()
    }

    /// Space-separated `scope` parameter: reserved scopes first, then configured ones
    pub fn scope_param(&self) -> String {
        RESERVED_SCOPES
            .iter()
            .map(|s| s.to_string())
            .chain(
                self.scopes
                    .iter()
                    .filter(|s| !RESERVED_SCOPES.contains(&s.as_str()))
                    .cloned(),
            )
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl.as_secs() as i64
    }
}

/// Browser-safe Logto configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogtoClientConfig {
    pub endpoint: String,
    pub app_id: String,
    pub scopes: BTreeSet<String>,
    pub resources: BTreeSet<String>,
}

fn default_scopes() -> BTreeSet<String> {
    BTreeSet::from(["email".to_string(), "profile".to_string()])
}

fn random_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    key.copy_from_slice(&random_bytes(32));
    key
}

fn parse_url(var: &'static str, value: String) -> Result<String, ConfigError> {
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Ok(value.trim_end_matches('/').to_string())
        }
        _ => Err(ConfigError::InvalidUrl { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("NEXT_PUBLIC_TURING_API", "https://api.turing.test/"),
        ("LOGTO_ENDPOINT", "https://tenant.logto.app/"),
        ("LOGTO_APP_ID", "app-123"),
        ("LOGTO_APP_SECRET", "shh"),
    ];

    #[test]
    fn test_minimal_env_uses_defaults() {
        let config = EnvConfig::from_lookup(env(&REQUIRED)).unwrap();

        assert_eq!(config.api_base_url, "https://api.turing.test");
        assert_eq!(config.logto_endpoint, "https://tenant.logto.app");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.public_logto_endpoint, config.logto_endpoint);
        assert_eq!(config.public_logto_app_id, "app-123");
        assert_eq!(config.runtime_env, RuntimeEnv::Development);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.cookie_secret.is_none());
    }

    #[test]
    fn test_only_production_node_env_is_production() {
        for (raw, production) in [("production", true), ("test", false), ("staging", false)] {
            let mut pairs = REQUIRED.to_vec();
            pairs.push(("NODE_ENV", raw));
            let config = EnvConfig::from_lookup(env(&pairs)).unwrap();
            assert_eq!(config.runtime_env.is_production(), production, "NODE_ENV={raw}");
        }
    }

    #[test]
    fn test_each_required_variable_fails_fast() {
        for (missing, _) in REQUIRED {
            let pairs: Vec<(&str, &str)> =
                REQUIRED.iter().copied().filter(|(k, _)| *k != missing).collect();
            let err = EnvConfig::from_lookup(env(&pairs)).unwrap_err();
            assert_eq!(err, ConfigError::Missing(missing));
        }
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut pairs = REQUIRED.to_vec();
        pairs[2] = ("LOGTO_APP_ID", "   ");
        assert_eq!(
            EnvConfig::from_lookup(env(&pairs)).unwrap_err(),
            ConfigError::Missing("LOGTO_APP_ID")
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs[1] = ("LOGTO_ENDPOINT", "tenant.logto.app");
        assert!(matches!(
            EnvConfig::from_lookup(env(&pairs)),
            Err(ConfigError::InvalidUrl { var: "LOGTO_ENDPOINT", .. })
        ));
    }

    #[test]
    fn test_server_config_derivation() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("NODE_ENV", "production"));
        pairs.push(("NEXTAUTH_SECRET", "cookie-secret"));
        pairs.push(("NEXTAUTH_URL", "https://dash.turing.test"));
        let env_config = EnvConfig::from_lookup(env(&pairs)).unwrap();

        let server = env_config.server_config();
        assert_eq!(server.app_secret.as_deref(), Some("shh"));
        assert!(server.cookie_secure);
        assert_eq!(server.cookie_key, sha256(b"cookie-secret"));
        assert_eq!(server.session_cookie_name(), "logto_app-123");
        assert_eq!(server.redirect_uri(), "https://dash.turing.test/api/logto/callback");
        assert!(server.resources.contains("https://api.turing.test"));
        assert_eq!(server.scope_param(), "openid offline_access email profile");
    }

    #[test]
    fn test_client_config_carries_no_secrets() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("NEXT_PUBLIC_LOGTO_APP_ID", "public-app"));
        pairs.push(("NEXTAUTH_SECRET", "cookie-secret"));
        let client = EnvConfig::from_lookup(env(&pairs)).unwrap().client_config();

        let json = serde_json::to_string(&client).unwrap();
        assert!(json.contains("\"appId\":\"public-app\""));
        assert!(!json.contains("shh"));
        assert!(!json.contains("cookie-secret"));
        assert!(!json.to_lowercase().contains("secret"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = EnvConfig::from_lookup(env(&REQUIRED)).unwrap();
        assert!(!format!("{config:?}").contains("shh"));
        assert!(!format!("{:?}", config.server_config()).contains("shh"));
    }
}
