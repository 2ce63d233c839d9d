//! Global Fetch Interceptor
//!
//! A single process-wide hook around outgoing HTTP requests. Every request
//! routed through [`execute`] is checked for an authentication failure from
//! the upstream, and the installed handler is told about it. The response is
//! handed back untouched either way.
//!
//! Installation is idempotent: the first [`install`] wins and is never undone.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use reqwest::{Client, Request, Response, StatusCode};

/// An upstream rejected our credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFailure {
    pub url: String,
    pub status: StatusCode,
}

/// Callback run for every [`AuthFailure`]
pub type AuthFailureHandler = Arc<dyn Fn(&AuthFailure) + Send + Sync>;

/// Wraps request execution with auth-failure detection
#[derive(Clone)]
pub struct FetchInterceptor {
    on_auth_failure: AuthFailureHandler,
}

impl fmt::Debug for FetchInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchInterceptor").finish_non_exhaustive()
    }
}

static INTERCEPTOR: OnceCell<FetchInterceptor> = OnceCell::new();

/// Only 401 counts; a 403 is an authorization decision, the session is still fine.
pub fn is_auth_failure(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED
}

impl FetchInterceptor {
    pub fn new(on_auth_failure: AuthFailureHandler) -> Self {
        Self { on_auth_failure }
    }

    /// Notify the handler if `status` is an auth failure. Returns whether it fired.
    pub fn inspect(&self, url: &str, status: StatusCode) -> bool {
        if !is_auth_failure(status) {
            return false;
        }
        let failure = AuthFailure {
            url: url.to_string(),
            status,
        };
        tracing::warn!(url = %failure.url, status = status.as_u16(), "Upstream rejected credentials");
        (self.on_auth_failure)(&failure);
        true
    }

    pub async fn execute(&self, client: &Client, request: Request) -> reqwest::Result<Response> {
        let url = request.url().to_string();
        let response = client.execute(request).await?;
        self.inspect(&url, response.status());
        Ok(response)
    }
}

/// Install the process-wide interceptor.
///
/// Returns `false` when one is already installed; the existing handler stays.
pub fn install(on_auth_failure: AuthFailureHandler) -> bool {
    let mut installed_now = false;
    INTERCEPTOR.get_or_init(|| {
        installed_now = true;
        FetchInterceptor::new(on_auth_failure)
    });
    if installed_now {
        tracing::info!("Fetch interceptor installed");
    } else {
        tracing::debug!("Fetch interceptor already installed, ignoring");
    }
    installed_now
}

/// The installed interceptor, if any
pub fn installed() -> Option<&'static FetchInterceptor> {
    INTERCEPTOR.get()
}

/// Execute `request`, passing through the installed interceptor when there is one.
pub async fn execute(client: &Client, request: Request) -> reqwest::Result<Response> {
    match installed() {
        Some(interceptor) => interceptor.execute(client, request).await,
        None => client.execute(request).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_handler() -> (Arc<AtomicUsize>, AuthFailureHandler) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let handler: AuthFailureHandler = Arc::new(move |_failure: &AuthFailure| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (hits, handler)
    }

    #[test]
    fn test_inspect_fires_only_on_unauthorized() {
        let (hits, handler) = counting_handler();
        let interceptor = FetchInterceptor::new(handler);

        assert!(!interceptor.inspect("https://api.example.com/a", StatusCode::OK));
        assert!(!interceptor.inspect("https://api.example.com/a", StatusCode::FORBIDDEN));
        assert!(interceptor.inspect("https://api.example.com/a", StatusCode::UNAUTHORIZED));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_receives_failure_details() {
        let seen = Arc::new(std::sync::Mutex::new(None));
        let sink = seen.clone();
        let interceptor = FetchInterceptor::new(Arc::new(move |failure: &AuthFailure| {
            *sink.lock().unwrap() = Some(failure.clone());
        }));

        interceptor.inspect("https://api.example.com/me", StatusCode::UNAUTHORIZED);

        let failure = seen.lock().unwrap().clone().unwrap();
        assert_eq!(failure.url, "https://api.example.com/me");
        assert_eq!(failure.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_install_is_idempotent() {
        let (first_hits, first) = counting_handler();
        let (second_hits, second) = counting_handler();

        // Other tests in this binary may have installed already; either way
        // exactly one registration exists afterwards.
        let _ = install(first);
        assert!(!install(second));

        let interceptor = installed().expect("interceptor installed");
        interceptor.inspect("https://api.example.com", StatusCode::UNAUTHORIZED);

        assert_eq!(second_hits.load(Ordering::SeqCst), 0);
        assert!(first_hits.load(Ordering::SeqCst) <= 1);
    }
}
