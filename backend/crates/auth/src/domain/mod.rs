//! Domain Layer
//!
//! Session model, ID token claims, and the seams to the outside world.

pub mod claims;
pub mod cookie_store;
pub mod provider;
pub mod session;

// Re-exports
pub use claims::{Audience, IdTokenClaims};
pub use cookie_store::{CookieStore, CookieStoreError};
pub use provider::IdentityProvider;
pub use session::{AccessToken, LogtoSession, PendingSignIn, TokenSet};
