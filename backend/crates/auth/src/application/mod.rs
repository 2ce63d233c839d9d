//! Application Layer
//!
//! Configuration, the auth context, and one use case per session route.

pub mod callback;
pub mod config;
pub mod context;
pub mod manual_sign_out;
pub mod sign_in;
pub mod sign_out;
pub mod user_info;

// Re-exports
pub use callback::{CallbackParams, SignInCallbackUseCase};
pub use config::{EnvConfig, LogtoClientConfig, LogtoConfig};
pub use context::{AuthContext, AuthSession};
pub use manual_sign_out::ManualSignOutUseCase;
pub use sign_in::{SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use user_info::{UserInfoOutput, UserInfoUseCase};
