//! Sign-In Callback Use Case
//!
//! Completes the authorization-code flow: checks the returned `state`
//! against the pending sign-in and exchanges the code for tokens.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::provider::IdentityProvider;
use crate::domain::session::LogtoSession;
use crate::error::{AuthError, AuthResult};

/// Query parameters the provider redirects back with
#[derive(Debug, Clone, Default)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

pub struct SignInCallbackUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> SignInCallbackUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Returns the signed-in session to store.
    pub async fn execute(
        &self,
        session: Option<LogtoSession>,
        params: CallbackParams,
    ) -> AuthResult<LogtoSession> {
        if let Some(error) = params.error {
            return Err(AuthError::ProviderRejected {
                error,
                description: params.error_description,
            });
        }

        let mut session = session.ok_or(AuthError::SignInSessionMissing)?;
        let pending = session
            .pending
            .clone()
            .ok_or(AuthError::SignInSessionMissing)?;

        let now = Utc::now();
        if pending.is_expired(now) {
            return Err(AuthError::SignInSessionExpired);
        }

        let state = params
            .state
            .ok_or(AuthError::MissingCallbackParam("state"))?;
        if state != pending.state {
            return Err(AuthError::StateMismatch);
        }

        let code = params
            .code
            .ok_or(AuthError::MissingCallbackParam("code"))?;

        let tokens = self.provider.exchange_code(&code, &pending).await?;
        session.complete_sign_in(tokens, now);

        tracing::info!("User signed in");
        Ok(session)
    }
}
