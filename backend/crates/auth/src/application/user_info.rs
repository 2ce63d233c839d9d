//! User Info Use Case
//!
//! What `/api/logto/user` reports about the caller.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::domain::claims::IdTokenClaims;
use crate::domain::provider::IdentityProvider;
use crate::domain::session::LogtoSession;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Default)]
pub struct UserInfoOutput {
    pub is_authenticated: bool,
    pub claims: Option<IdTokenClaims>,
    pub user_info: Option<Value>,
}

pub struct UserInfoUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> UserInfoUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Claims come from the stored ID token; the profile is only fetched
    /// from the provider when `fetch_user_info` is set.
    pub async fn execute(
        &self,
        session: Option<&LogtoSession>,
        fetch_user_info: bool,
    ) -> AuthResult<UserInfoOutput> {
        let Some(id_token) = session.and_then(|s| s.id_token.as_deref()) else {
            return Ok(UserInfoOutput::default());
        };

        let claims = IdTokenClaims::decode(id_token)?;

        let user_info = if fetch_user_info {
            let access_token = session
                .and_then(|s| s.access_token_at(None, Utc::now()))
                .ok_or(AuthError::AccessTokenUnavailable)?;
            Some(self.provider.fetch_user_info(&access_token).await?)
        } else {
            None
        };

        Ok(UserInfoOutput {
            is_authenticated: true,
            claims: Some(claims),
            user_info,
        })
    }
}
