//! Authentication state for the console.
//!
//! The console never manages credentials itself; it only tracks what the
//! hosted auth provider told it. A missing user means "not authenticated".

use crate::session::{AuthUser, Session};

/// Current sign-in status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    SignedOut,
    SigningIn,
    SignedIn(Session),
    Failed(String),
}

/// What a page needs from the auth collaborator.
pub trait AuthProvider {
    fn current_user(&self) -> Option<&AuthUser>;

    /// Whether a sign-in attempt is still in flight.
    fn is_pending(&self) -> bool;

    fn sign_out(&mut self);
}

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub status: AuthStatus,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.status {
            AuthStatus::SignedIn(session) => Some(session),
            _ => None,
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session().map(|s| s.access_token.as_str())
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            AuthStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn start_sign_in(&mut self) {
        self.status = AuthStatus::SigningIn;
    }

    pub fn sign_in_success(&mut self, session: Session) {
        log::info!("Signed in as {}", session.user.display_name());
        self.status = AuthStatus::SignedIn(session);
    }

    pub fn sign_in_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("Sign in failed: {message}");
        self.status = AuthStatus::Failed(message);
    }
}

impl AuthProvider for AuthState {
    fn current_user(&self) -> Option<&AuthUser> {
        self.session().map(|s| &s.user)
    }

    fn is_pending(&self) -> bool {
        self.status == AuthStatus::SigningIn
    }

    fn sign_out(&mut self) {
        self.status = AuthStatus::SignedOut;
    }
}

/// How an auth-gated page should render this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess<'a> {
    /// Sign-in in flight; show a spinner.
    Loading,
    /// No user; show the login page instead.
    RedirectToLogin,
    Ready(&'a AuthUser),
}

impl<'a> PageAccess<'a> {
    pub fn resolve(auth: &'a impl AuthProvider) -> Self {
        match auth.current_user() {
            Some(user) => Self::Ready(user),
            None if auth.is_pending() => Self::Loading,
            None => Self::RedirectToLogin,
        }
    }
}
