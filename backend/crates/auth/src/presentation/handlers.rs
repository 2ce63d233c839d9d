//! HTTP Handlers
//!
//! Session routes mounted under `/api/logto`. Each logs the request URL on
//! entry and the response status on the way out.

use axum::Json;
use axum::extract::{OriginalUri, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use platform::cookie::parse_cookies;
use std::sync::Arc;

use crate::application::config::LogtoConfig;
use crate::application::{
    ManualSignOutUseCase, SignInCallbackUseCase, SignInUseCase, SignOutUseCase, UserInfoUseCase,
};
use crate::domain::provider::IdentityProvider;
use crate::error::AuthResult;
use crate::infra::session_cookie::SessionCookieCodec;
use crate::presentation::cookies::ResponseCookies;
use crate::presentation::dto::{
    CallbackQuery, CookieSummary, DebugCookiesResponse, ErrorBody, LogtoUserResponse,
    ManualSignOutResponse, UserQuery,
};

/// Shared state for the session routes
pub struct LogtoAppState<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    pub provider: Arc<P>,
    pub config: Arc<LogtoConfig>,
    pub codec: Arc<SessionCookieCodec>,
}

// derive(Clone) would demand P: Clone
impl<P> Clone for LogtoAppState<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            config: self.config.clone(),
            codec: self.codec.clone(),
        }
    }
}

/// Redirect that also stores (or clears) the session cookie
fn redirect_with_cookie(to: &str, cookie: HeaderValue) -> Response {
    ([(header::SET_COOKIE, cookie)], Redirect::temporary(to)).into_response()
}

// ============================================================================
// Sign In
// ============================================================================

/// GET /api/logto/sign-in
pub async fn sign_in<P>(
    State(state): State<LogtoAppState<P>>,
    OriginalUri(uri): OriginalUri,
) -> AuthResult<Response>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    tracing::info!(url = %uri, "Sign-in request");

    let use_case = SignInUseCase::new(state.provider.clone(), state.config.clone());
    let output = use_case.execute()?;

    let cookie = state.codec.set_cookie(&output.session)?;
    let response = redirect_with_cookie(&output.redirect_url, cookie);

    tracing::info!(status = response.status().as_u16(), "Sign-in response");
    Ok(response)
}

// ============================================================================
// Callback
// ============================================================================

/// GET /api/logto/callback
pub async fn sign_in_callback<P>(
    State(state): State<LogtoAppState<P>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Query(query): Query<CallbackQuery>,
) -> AuthResult<Response>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    tracing::info!(url = %uri, "Sign-in callback");

    let session = state.codec.read(&headers);
    let use_case = SignInCallbackUseCase::new(state.provider.clone());
    let session = use_case.execute(session, query.into()).await?;

    let cookie = state.codec.set_cookie(&session)?;
    let response = redirect_with_cookie(&state.config.base_url, cookie);

    tracing::info!(status = response.status().as_u16(), "Sign-in callback response");
    Ok(response)
}

// ============================================================================
// Sign Out
// ============================================================================

/// GET /api/logto/sign-out
pub async fn sign_out<P>(
    State(state): State<LogtoAppState<P>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    tracing::info!(url = %uri, "Sign-out request");

    let session = state.codec.read(&headers);
    let use_case = SignOutUseCase::new(state.provider.clone());
    let end_session_url = use_case.execute(session.as_ref())?;

    let cookie = state.codec.clear_cookie()?;
    let response = redirect_with_cookie(&end_session_url, cookie);

    tracing::info!(status = response.status().as_u16(), "Sign-out response");
    Ok(response)
}

// ============================================================================
// User
// ============================================================================

/// GET /api/logto/user
pub async fn user<P>(
    State(state): State<LogtoAppState<P>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Query(query): Query<UserQuery>,
) -> AuthResult<Json<LogtoUserResponse>>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    tracing::info!(url = %uri, "User request");

    let session = state.codec.read(&headers);
    let use_case = UserInfoUseCase::new(state.provider.clone());
    let output = use_case
        .execute(session.as_ref(), query.fetch_user_info)
        .await?;

    tracing::info!(status = StatusCode::OK.as_u16(), "User response");
    Ok(Json(LogtoUserResponse {
        is_authenticated: output.is_authenticated,
        claims: output.claims,
        user_info: output.user_info,
    }))
}

// ============================================================================
// Manual Sign Out
// ============================================================================

/// POST /api/logto/manual-sign-out
pub async fn manual_sign_out<P>(
    State(state): State<LogtoAppState<P>>,
    headers: HeaderMap,
) -> Response
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let mut cookies = ResponseCookies::from_headers(&headers, state.codec.cookie_attributes());
    let outcome = ManualSignOutUseCase::execute(&mut cookies);
    manual_sign_out_response(outcome, cookies.into_set_cookies())
}

/// Any failure becomes `500 {"error":"Sign-out failed"}` without cookie changes.
pub(crate) fn manual_sign_out_response(
    outcome: AuthResult<Vec<String>>,
    set_cookies: Vec<HeaderValue>,
) -> Response {
    match outcome {
        Ok(deleted) => {
            tracing::info!(count = deleted.len(), "Manual sign-out cleared cookies");
            let mut response = Json(ManualSignOutResponse { success: true }).into_response();
            for cookie in set_cookies {
                response.headers_mut().append(header::SET_COOKIE, cookie);
            }
            response
        }
        Err(e) => {
            tracing::error!(error = %e, "Manual sign-out failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Sign-out failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Debug Cookies
// ============================================================================

/// GET /api/logto/debug-cookies
pub async fn debug_cookies(headers: HeaderMap) -> Json<DebugCookiesResponse> {
    let cookies: Vec<CookieSummary> = parse_cookies(&headers)
        .into_iter()
        .map(|cookie| CookieSummary {
            has_value: !cookie.value.is_empty(),
            value_length: cookie.value.len(),
            name: cookie.name,
        })
        .collect();
    let cookie_names: Vec<String> = cookies.iter().map(|c| c.name.clone()).collect();

    tracing::info!(cookies = ?cookie_names, "Debug cookies");

    Json(DebugCookiesResponse {
        count: cookies.len(),
        cookie_names,
        cookies,
    })
}
