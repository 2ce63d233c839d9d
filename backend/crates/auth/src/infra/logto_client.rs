//! Logto OIDC Client
//!
//! Talks to a Logto tenant over its OIDC endpoints:
//! - `oidc/auth` - authorization (browser redirect)
//! - `oidc/token` - code exchange (client_secret_basic)
//! - `oidc/me` - userinfo
//! - `oidc/session/end` - end-session (browser redirect)
//!
//! Outgoing requests go through `platform::fetch::execute`, so the global
//! interceptor sees them.

use std::sync::Arc;

use reqwest::{Client, Response, Url};
use serde_json::Value;

use crate::application::config::LogtoConfig;
use crate::domain::provider::IdentityProvider;
use crate::domain::session::{PendingSignIn, TokenSet};
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone)]
pub struct LogtoClient {
    http: Client,
    config: Arc<LogtoConfig>,
    /// Tenant endpoint with a trailing slash, so `join` appends
    endpoint: Url,
}

impl LogtoClient {
    pub fn new(config: Arc<LogtoConfig>) -> AuthResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("turing-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_http_client(http, config)
    }

    pub fn with_http_client(http: Client, config: Arc<LogtoConfig>) -> AuthResult<Self> {
        let endpoint = Url::parse(&format!("{}/", config.endpoint.trim_end_matches('/')))
            .map_err(|e| AuthError::Internal(format!("Invalid Logto endpoint: {e}")))?;
        Ok(Self {
            http,
            config,
            endpoint,
        })
    }

    fn oidc_url(&self, path: &str) -> AuthResult<Url> {
        self.endpoint
            .join(path)
            .map_err(|e| AuthError::Internal(format!("Invalid OIDC path {path}: {e}")))
    }

    /// Non-2xx responses become [`AuthError::Provider`] with the body as message.
    async fn check_status(response: Response) -> AuthResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(AuthError::Provider {
            status: status.as_u16(),
            message,
        })
    }
}

impl IdentityProvider for LogtoClient {
    fn sign_in_url(&self, pending: &PendingSignIn) -> AuthResult<String> {
        let mut url = self.oidc_url("oidc/auth")?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("client_id", &self.config.app_id)
                .append_pair("redirect_uri", &pending.redirect_uri)
                .append_pair("code_challenge", &pending.code_challenge())
                .append_pair("code_challenge_method", "S256")
                .append_pair("state", &pending.state)
                .append_pair("response_type", "code")
                .append_pair("scope", &self.config.scope_param())
                .append_pair("prompt", "consent");
            for resource in &self.config.resources {
                query.append_pair("resource", resource);
            }
        }
        Ok(url.into())
    }

    async fn exchange_code(&self, code: &str, pending: &PendingSignIn) -> AuthResult<TokenSet> {
        let url = self.oidc_url("oidc/token")?;
        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", pending.redirect_uri.as_str()),
            ("code_verifier", pending.code_verifier.as_str()),
            ("client_id", self.config.app_id.as_str()),
        ];

        let request = self
            .http
            .post(url)
            .basic_auth(&self.config.app_id, self.config.app_secret.as_deref())
            .form(&form)
            .build()?;

        let response = platform::fetch::execute(&self.http, request).await?;
        let tokens = Self::check_status(response).await?.json::<TokenSet>().await?;

        tracing::debug!(
            has_id_token = tokens.id_token.is_some(),
            has_refresh_token = tokens.refresh_token.is_some(),
            expires_in = tokens.expires_in,
            "Authorization code exchanged"
        );
        Ok(tokens)
    }

    async fn fetch_user_info(&self, access_token: &str) -> AuthResult<Value> {
        let url = self.oidc_url("oidc/me")?;
        let request = self.http.get(url).bearer_auth(access_token).build()?;

        let response = platform::fetch::execute(&self.http, request).await?;
        Ok(Self::check_status(response).await?.json::<Value>().await?)
    }

    fn sign_out_url(&self, id_token: Option<&str>) -> AuthResult<String> {
        let mut url = self.oidc_url("oidc/session/end")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("client_id", &self.config.app_id).append_pair(
                "post_logout_redirect_uri",
                &self.config.post_logout_redirect_uri(),
            );
            if let Some(id_token) = id_token {
                query.append_pair("id_token_hint", id_token);
            }
        }
        Ok(url.into())
    }
}
