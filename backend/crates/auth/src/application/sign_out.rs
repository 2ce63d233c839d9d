//! Sign Out Use Case
//!
//! Forgets the local session and points the browser at the provider's
//! end-session endpoint.

use std::sync::Arc;

use crate::domain::provider::IdentityProvider;
use crate::domain::session::LogtoSession;
use crate::error::AuthResult;

pub struct SignOutUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> SignOutUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Returns the end-session URL. The caller clears the session cookie.
    pub fn execute(&self, session: Option<&LogtoSession>) -> AuthResult<String> {
        let was_signed_in = session.is_some_and(LogtoSession::is_authenticated);
        let id_token = session.and_then(|s| s.id_token.as_deref());
        let url = self.provider.sign_out_url(id_token)?;

        tracing::info!(was_signed_in, "User signed out");
        Ok(url)
    }
}
