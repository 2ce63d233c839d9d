//! Shared Kernel
//!
//! Vocabulary shared by every backend crate:
//! - The unified [`error::app_error::AppError`] and its [`error::kind::ErrorKind`]
//! - The RFC 7807 problem-details response used for every HTTP error

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
