//! Gating decisions shared by `AuthGuard` and `AuthWrapper`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical redirect behavior. The decision is a
//! pure function of `AuthState`; navigation is issued by a separate effect
//! that reacts to decision changes, never from inside a render closure.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes;
use crate::state::auth::AuthState;

/// Where a guard stands for the current viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Auth source has not answered; show a loading indicator.
    Checking,
    /// Signed out; send to login.
    Unauthorized,
    /// Signed in without the admin role on an admin-only route; send home.
    InsufficientPrivilege,
    Authorized,
}

/// Navigation a guard issues when entering a blocked state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Home,
}

impl Redirect {
    /// Concrete path, with `from` remembered for the login round-trip.
    pub fn path(self, from: &str) -> String {
        match self {
            Self::Login => routes::login_with_next(from),
            Self::Home => routes::HOME.to_owned(),
        }
    }
}

impl GuardState {
    pub fn evaluate(state: &AuthState, require_admin: bool) -> Self {
        if state.is_loading {
            Self::Checking
        } else if !state.is_authenticated {
            Self::Unauthorized
        } else if require_admin && !state.is_admin {
            Self::InsufficientPrivilege
        } else {
            Self::Authorized
        }
    }

    pub fn redirect(self) -> Option<Redirect> {
        match self {
            Self::Unauthorized => Some(Redirect::Login),
            Self::InsufficientPrivilege => Some(Redirect::Home),
            Self::Checking | Self::Authorized => None,
        }
    }
}

/// Redirect owed when the guard moves from `prev` to `next`.
///
/// Only a change of state can produce a redirect, so staying in a blocked
/// state never navigates twice.
pub fn redirect_on_transition(prev: Option<GuardState>, next: GuardState) -> Option<Redirect> {
    if prev == Some(next) {
        return None;
    }
    next.redirect()
}

/// Render-time check used by `AuthWrapper`. `require_admin` implies
/// `require_auth`; ungated content is always allowed.
pub fn wrapper_allows(state: &AuthState, require_auth: bool, require_admin: bool) -> bool {
    if !require_auth && !require_admin {
        return true;
    }
    GuardState::evaluate(state, require_admin) == GuardState::Authorized
}

/// Navigate away whenever `decision` transitions into a blocked state.
///
/// `current_path` is read untracked at redirect time so the login page can
/// send the viewer back afterwards.
pub fn install_guard_redirect<F, P>(decision: Memo<GuardState>, current_path: P, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
    P: Fn() -> String + 'static,
{
    Effect::new(move |prev: Option<GuardState>| {
        let next = decision.get();
        if let Some(target) = redirect_on_transition(prev, next) {
            let path = target.path(&current_path());
            log::debug!("auth guard redirect: {next:?} -> {path}");
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        next
    });
}
