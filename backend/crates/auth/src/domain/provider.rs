//! Identity Provider
//!
//! The OIDC operations the session routes need from the hosted provider.

use serde_json::Value;

use crate::domain::session::{PendingSignIn, TokenSet};
use crate::error::AuthResult;

#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Authorization URL the browser is redirected to
    fn sign_in_url(&self, pending: &PendingSignIn) -> AuthResult<String>;

    /// Exchange an authorization code for tokens
    async fn exchange_code(&self, code: &str, pending: &PendingSignIn) -> AuthResult<TokenSet>;

    /// Fetch the user profile with an access token
    async fn fetch_user_info(&self, access_token: &str) -> AuthResult<Value>;

    /// End-session URL that signs the user out at the provider.
    /// `id_token` is passed as the `id_token_hint` when known.
    fn sign_out_url(&self, id_token: Option<&str>) -> AuthResult<String>;
}
