//! Auth Backend Module - Logto session gateway
//!
//! Clean Architecture structure:
//! - `domain/` - Session model, ID token claims, identity-provider and cookie-store traits
//! - `application/` - Configuration, auth context, sign-in/out use cases
//! - `infra/` - Logto OIDC client, signed session cookie codec
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Authorization-code sign-in with PKCE against Logto
//! - Session state in an HMAC-signed cookie (`logto_{app_id}`)
//! - Per-request [`AuthContext`] injected by middleware and extracted by handlers
//! - Manual sign-out fallback that clears every auth-looking cookie
//!
//! ## Not handled here
//! - Token refresh
//! - ID token signature verification (claims are decoded, not validated)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{ConfigError, EnvConfig, LogtoClientConfig, LogtoConfig};
pub use application::context::{AuthContext, AuthSession};
pub use error::{AuthError, AuthResult};
pub use infra::logto_client::LogtoClient;
pub use infra::session_cookie::SessionCookieCodec;
pub use presentation::middleware::{provide_auth_context, require_auth};
pub use presentation::router::{logto_router, logto_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::claims::*;
    pub use crate::domain::session::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
