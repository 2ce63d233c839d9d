//! Infrastructure Layer
//!
//! The Logto OIDC client and the signed session cookie.

pub mod logto_client;
pub mod session_cookie;

pub use logto_client::LogtoClient;
pub use session_cookie::SessionCookieCodec;
