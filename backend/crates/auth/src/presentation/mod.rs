//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod cookies;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::LogtoAppState;
pub use middleware::{provide_auth_context, require_auth};
pub use router::{logto_router, logto_router_generic};
