use log::debug;
use std::sync::RwLock;

use crate::constants::PUBLIC_ROUTES;

pub type UnauthorizedHook = Box<dyn Fn() + Send + Sync>;

/// In-memory session state for the current user.
///
/// The embedding shell stores the bearer token here after login, reports
/// route changes, and registers a hook that navigates to the login screen
/// when the backend rejects the session.
pub struct Session {
    token: RwLock<Option<String>>,
    current_route: RwLock<String>,
    public_routes: Vec<String>,
    unauthorized_hook: RwLock<Option<UnauthorizedHook>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            token: RwLock::new(None),
            current_route: RwLock::new("/".to_string()),
            public_routes: PUBLIC_ROUTES.iter().map(|r| r.to_string()).collect(),
            unauthorized_hook: RwLock::new(None),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.into());
        }
    }

    pub fn clear_token(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    pub fn set_current_route(&self, route: impl Into<String>) {
        if let Ok(mut guard) = self.current_route.write() {
            *guard = route.into();
        }
    }

    pub fn current_route(&self) -> String {
        self.current_route
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|_| "/".to_string())
    }

    pub fn is_public_route(&self, route: &str) -> bool {
        self.public_routes.iter().any(|public| route == public)
    }

    /// Registers the callback invoked on global de-authentication.
    pub fn on_unauthorized(&self, hook: UnauthorizedHook) {
        if let Ok(mut guard) = self.unauthorized_hook.write() {
            *guard = Some(hook);
        }
    }

    /// Clears the stored token and, when the current route is not public,
    /// invokes the registered unauthorized hook. Safe to call repeatedly.
    pub fn handle_unauthorized(&self) {
        self.clear_token();
        let route = self.current_route();
        if self.is_public_route(&route) {
            debug!("Unauthorized response on public route {}, no redirect", route);
            return;
        }
        if let Ok(guard) = self.unauthorized_hook.read() {
            if let Some(hook) = guard.as_ref() {
                hook();
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn unauthorized_clears_token_and_invokes_hook() {
        let session = Session::new();
        session.set_token("abc123");
        session.set_current_route("/clients");

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        session.on_unauthorized(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        session.handle_unauthorized();
        assert_eq!(session.token(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unauthorized_on_public_route_skips_hook() {
        let session = Session::new();
        session.set_token("abc123");
        session.set_current_route("/login");

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        session.on_unauthorized(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        session.handle_unauthorized();
        assert_eq!(session.token(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
