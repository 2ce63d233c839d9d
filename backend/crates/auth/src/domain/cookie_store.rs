//! Cookie Store
//!
//! The browser cookie jar as seen by one request/response pair.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CookieStoreError {
    #[error("Cannot delete cookie {name}: {reason}")]
    Delete { name: String, reason: String },
}

/// Cookies sent with the request, and deletion instructions for the response
pub trait CookieStore {
    /// Names of the cookies the client sent, in order
    fn names(&self) -> Vec<String>;

    /// Tell the client to drop `name`. Deleting an absent cookie is not an error.
    fn delete(&mut self, name: &str) -> Result<(), CookieStoreError>;
}
