//! Logto Session Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::LogtoConfig;
use crate::domain::provider::IdentityProvider;
use crate::infra::logto_client::LogtoClient;
use crate::infra::session_cookie::SessionCookieCodec;
use crate::presentation::handlers::{self, LogtoAppState};

/// Create the session router backed by Logto
pub fn logto_router(client: LogtoClient, config: Arc<LogtoConfig>) -> Router {
    logto_router_generic(client, config)
}

/// Create the session router for any identity provider
pub fn logto_router_generic<P>(provider: P, config: Arc<LogtoConfig>) -> Router
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let state = LogtoAppState {
        provider: Arc::new(provider),
        codec: Arc::new(SessionCookieCodec::new(&config)),
        config,
    };

    Router::new()
        .route("/sign-in", get(handlers::sign_in::<P>))
        .route("/callback", get(handlers::sign_in_callback::<P>))
        .route("/sign-out", get(handlers::sign_out::<P>))
        .route("/user", get(handlers::user::<P>))
        .route("/manual-sign-out", post(handlers::manual_sign_out::<P>))
        .route("/debug-cookies", get(handlers::debug_cookies))
        .with_state(state)
}
