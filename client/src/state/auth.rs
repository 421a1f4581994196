//! Viewer privilege snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Produced by the auth provider from the backend's `/api/auth/me` answer and
//! read by guards, wrappers and account chrome. While `is_loading` is set the
//! other two fields are placeholders and must not drive decisions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state as seen by gating components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub is_loading: bool,
}

impl AuthState {
    /// State before the source has answered.
    pub const fn loading() -> Self {
        Self { is_authenticated: false, is_admin: false, is_loading: true }
    }

    /// Settled state for the given account, or signed out when `None`.
    pub fn from_user(user: Option<&User>) -> Self {
        Self {
            is_authenticated: user.is_some(),
            is_admin: user.is_some_and(User::is_admin),
            is_loading: false,
        }
    }

    /// Settled and signed in.
    pub fn is_signed_in(&self) -> bool {
        !self.is_loading && self.is_authenticated
    }

    /// Settled, signed in, and an administrator.
    pub fn is_signed_in_admin(&self) -> bool {
        self.is_signed_in() && self.is_admin
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::loading()
    }
}
