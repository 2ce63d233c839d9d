//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the backend crates:
//! - Cookie parsing and `Set-Cookie` construction
//! - Cryptographic helpers (SHA-256, HMAC-SHA256, base64url, random tokens)
//! - The process-wide outgoing request interceptor

pub mod cookie;
pub mod crypto;
pub mod fetch;
