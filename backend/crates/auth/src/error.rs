//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::cookie_store::CookieStoreError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider redirected back with `error=...`
    #[error("Identity provider rejected sign-in: {error}")]
    ProviderRejected {
        error: String,
        description: Option<String>,
    },

    /// Callback is missing a required query parameter
    #[error("Missing callback parameter: {0}")]
    MissingCallbackParam(&'static str),

    /// Callback arrived without a sign-in started from this browser
    #[error("No sign-in in progress")]
    SignInSessionMissing,

    /// Callback arrived after the sign-in window closed
    #[error("Sign-in session expired")]
    SignInSessionExpired,

    /// Callback `state` differs from the one we issued
    #[error("Sign-in state mismatch")]
    StateMismatch,

    /// No usable access token in the session
    #[error("Access token unavailable")]
    AccessTokenUnavailable,

    /// ID token could not be decoded
    #[error("Invalid ID token: {0}")]
    InvalidIdToken(String),

    /// Provider answered with a non-success status
    #[error("Identity provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// Transport failure talking to the provider
    #[error("Identity provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Cookie(#[from] CookieStoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::ProviderRejected { .. }
            | AuthError::MissingCallbackParam(_)
            | AuthError::SignInSessionMissing
            | AuthError::SignInSessionExpired
            | AuthError::StateMismatch => ErrorKind::BadRequest,
            AuthError::AccessTokenUnavailable => ErrorKind::Unauthorized,
            AuthError::Provider { .. } | AuthError::Http(_) => ErrorKind::BadGateway,
            AuthError::InvalidIdToken(_) | AuthError::Cookie(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::SignInSessionMissing
            | AuthError::SignInSessionExpired
            | AuthError::StateMismatch => err.with_action("Start the sign-in again"),
            AuthError::AccessTokenUnavailable => err.with_action("Sign in again"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Provider { status, message } => {
                tracing::error!(status = *status, message = %message, "Identity provider error");
            }
            AuthError::Http(e) => {
                tracing::error!(error = %e, "Identity provider unreachable");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::StateMismatch => {
                tracing::warn!("Sign-in callback state mismatch");
            }
            AuthError::ProviderRejected { error, description } => {
                tracing::warn!(
                    error = %error,
                    description = description.as_deref().unwrap_or(""),
                    "Identity provider rejected sign-in"
                );
            }
            _ if self.kind().is_server_error() => {
                tracing::error!(error = %self, "Auth error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
