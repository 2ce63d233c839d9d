//! Auth Context
//!
//! The per-request view of "who is signed in", handed to handlers explicitly.
//! A handler asks for an [`AuthContext`]; the provider middleware supplies one
//! built from the caller's session. Without that middleware the handler gets
//! [`AuthContext::default`], the "not yet known" state.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;

use crate::domain::session::LogtoSession;

/// Session capability backing an [`AuthContext`]
pub trait AuthSession: Send + Sync {
    fn is_authenticated(&self) -> bool;

    fn is_loading(&self) -> bool;

    /// Access token for `resource`, `None` if there is none usable
    fn access_token(&self, resource: Option<&str>) -> Option<String>;
}

impl AuthSession for LogtoSession {
    fn is_authenticated(&self) -> bool {
        LogtoSession::is_authenticated(self)
    }

    /// A session read from the cookie is fully resolved.
    fn is_loading(&self) -> bool {
        false
    }

    fn access_token(&self, resource: Option<&str>) -> Option<String> {
        self.access_token_at(resource, Utc::now())
    }
}

/// Current authentication state.
///
/// Every read goes straight to the underlying session; nothing is cached here.
#[derive(Clone, Default)]
pub struct AuthContext {
    session: Option<Arc<dyn AuthSession>>,
}

impl AuthContext {
    pub fn from_session(session: Arc<dyn AuthSession>) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// Whether a provider supplied this context
    pub fn is_provided(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.is_authenticated())
    }

    /// `true` until a provider has resolved the session
    pub fn is_loading(&self) -> bool {
        self.session
            .as_ref()
            .is_none_or(|session| session.is_loading())
    }

    /// Without a provider this yields an empty token rather than `None`.
    pub fn get_access_token(&self, resource: Option<&str>) -> Option<String> {
        match &self.session {
            Some(session) => session.access_token(resource),
            None => Some(String::new()),
        }
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("provided", &self.is_provided())
            .field("is_authenticated", &self.is_authenticated())
            .field("is_loading", &self.is_loading())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Session whose state can be flipped after the context is built
    struct ScriptedSession {
        state: Mutex<(bool, bool)>,
    }

    impl AuthSession for ScriptedSession {
        fn is_authenticated(&self) -> bool {
            self.state.lock().unwrap().0
        }

        fn is_loading(&self) -> bool {
            self.state.lock().unwrap().1
        }

        fn access_token(&self, resource: Option<&str>) -> Option<String> {
            self.is_authenticated()
                .then(|| format!("token-for-{}", resource.unwrap_or("default")))
        }
    }

    #[test]
    fn test_default_context_is_unresolved() {
        let ctx = AuthContext::default();

        assert!(!ctx.is_provided());
        assert!(!ctx.is_authenticated());
        assert!(ctx.is_loading());
        assert_eq!(ctx.get_access_token(None), Some(String::new()));
        assert_eq!(ctx.get_access_token(Some("https://api")), Some(String::new()));
    }

    #[test]
    fn test_context_mirrors_session_without_lag() {
        let session = Arc::new(ScriptedSession {
            state: Mutex::new((false, true)),
        });
        let ctx = AuthContext::from_session(session.clone());

        for state in [(false, true), (false, false), (true, false), (true, true)] {
            *session.state.lock().unwrap() = state;
            assert_eq!((ctx.is_authenticated(), ctx.is_loading()), state);
        }
    }

    #[test]
    fn test_access_token_passes_resource_through() {
        let session = Arc::new(ScriptedSession {
            state: Mutex::new((true, false)),
        });
        let ctx = AuthContext::from_session(session);

        assert_eq!(
            ctx.get_access_token(Some("api")),
            Some("token-for-api".to_string())
        );
    }

    #[test]
    fn test_empty_logto_session_is_resolved_and_signed_out() {
        let ctx = AuthContext::from_session(Arc::new(LogtoSession::default()));

        assert!(ctx.is_provided());
        assert!(!ctx.is_authenticated());
        assert!(!ctx.is_loading());
        assert_eq!(ctx.get_access_token(None), None);
    }
}
