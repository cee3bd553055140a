use crate::domain::model::{AuthSession, User};
use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle to the signed-in user's session.
///
/// Cloning is cheap and every clone sees the same state. The HTTP client
/// reads the token from here; login and logout write it.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<Option<StoredSession>>>,
}

#[derive(Debug)]
struct StoredSession {
    access_token: String,
    user: Option<User>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that only carries a bearer token, e.g. one passed on the
    /// command line. The user is resolved lazily through the profile call.
    pub fn with_token(token: impl Into<String>) -> Self {
        let context = Self::new();
        context.set_token(token);
        context
    }

    pub fn set(&self, session: AuthSession) {
        tracing::info!("Signed in as {}", session.user.email);
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(StoredSession {
            access_token: session.access_token,
            user: Some(session.user),
        });
    }

    fn set_token(&self, token: impl Into<String>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(StoredSession {
            access_token: token.into(),
            user: None,
        });
    }

    pub fn clear(&self) {
        let previous = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            tracing::info!("Session cleared");
        }
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| session.access_token.clone())
    }

    /// None for anonymous sessions and token-only sessions.
    pub fn current_user(&self) -> Option<User> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(|session| session.user.clone())
    }

    /// Replace the stored user while keeping the token, e.g. after a
    /// profile update or email verification.
    pub fn refresh_user(&self, user: User) {
        if let Some(session) = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .as_mut()
        {
            session.user = Some(user);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
