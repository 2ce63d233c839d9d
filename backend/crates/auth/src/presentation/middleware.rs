//! Auth Middleware
//!
//! `provide_auth_context` builds the request's [`AuthContext`] from the session
//! cookie; handlers and `require_auth` extract it.

use std::convert::Infallible;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::context::AuthContext;
use crate::infra::session_cookie::SessionCookieCodec;

/// Middleware that resolves the session and provides the auth context.
///
/// A missing or unreadable cookie yields a signed-out context, never an error.
pub async fn provide_auth_context(
    State(codec): State<Arc<SessionCookieCodec>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let session = codec.read(req.headers()).unwrap_or_default();
    tracing::debug!(authenticated = session.is_authenticated(), "Auth context resolved");

    req.extensions_mut()
        .insert(AuthContext::from_session(Arc::new(session)));

    next.run(req).await
}

/// Middleware that requires a signed-in caller
pub async fn require_auth(
    auth: AuthContext,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    if !auth.is_authenticated() {
        tracing::debug!(path = %req.uri().path(), "Unauthenticated request rejected");
        return Err((StatusCode::UNAUTHORIZED, [("X-Auth-Required", "true")]).into_response());
    }

    Ok(next.run(req).await)
}

/// Without `provide_auth_context` upstream this yields [`AuthContext::default`].
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .unwrap_or_default())
    }
}
