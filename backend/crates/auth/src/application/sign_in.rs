//! Sign In Use Case
//!
//! Starts an authorization-code flow with PKCE.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::LogtoConfig;
use crate::domain::provider::IdentityProvider;
use crate::domain::session::{LogtoSession, PendingSignIn};
use crate::error::AuthResult;

pub struct SignInOutput {
    /// Provider authorization URL
    pub redirect_url: String,
    /// Session to store before redirecting
    pub session: LogtoSession,
}

pub struct SignInUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
    config: Arc<LogtoConfig>,
}

impl<P> SignInUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>, config: Arc<LogtoConfig>) -> Self {
        Self { provider, config }
    }

    pub fn execute(&self) -> AuthResult<SignInOutput> {
        let pending = PendingSignIn::new(self.config.redirect_uri(), Utc::now());
        let redirect_url = self.provider.sign_in_url(&pending)?;

        tracing::debug!(redirect_uri = %pending.redirect_uri, "Sign-in started");

        Ok(SignInOutput {
            redirect_url,
            session: LogtoSession::begin_sign_in(pending),
        })
    }
}
