//! Auth context provider and accessor.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` is the single writer of the viewer's `AuthState`; guards,
//! wrappers and header chrome read it through [`use_auth`]. Live state is
//! withheld until the provider has mounted in the browser: the server render
//! and the first hydration pass both see `AuthState::loading()`, so their
//! markup matches.
//!
//! DESIGN
//! ======
//! Every refresh, sign-in and sign-out bumps a generation counter. An answer
//! from `/api/auth/me` only lands if no newer operation started meanwhile, so
//! a slow refresh can't resurrect a session the viewer just ended.

#[cfg(test)]
#[path = "auth_provider_test.rs"]
mod auth_provider_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api::ApiError;
use crate::net::types::User;
use crate::state::auth::AuthState;

/// Handle to the auth state of the current page tree. Cheap to copy.
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: RwSignal<Option<User>>,
    resolved: RwSignal<bool>,
    mounted: RwSignal<bool>,
    generation: StoredValue<u64>,
    state: Signal<AuthState>,
}

impl AuthContext {
    fn new() -> Self {
        let user = RwSignal::new(None::<User>);
        let resolved = RwSignal::new(false);
        let mounted = RwSignal::new(false);
        let state = Signal::derive(move || {
            exposed_state(mounted.get(), resolved.get(), user.with(|u| AuthState::from_user(u.as_ref())))
        });
        Self { user, resolved, mounted, generation: StoredValue::new(0), state }
    }

    /// Reactive viewer state.
    pub fn state(&self) -> Signal<AuthState> {
        self.state
    }

    /// The signed-in account once the state has settled.
    pub fn user(&self) -> Signal<Option<User>> {
        let state = self.state;
        let user = self.user;
        Signal::derive(move || if state.get().is_signed_in() { user.get() } else { None })
    }

    fn next_generation(&self) -> u64 {
        self.generation.update_value(|g| *g += 1);
        self.generation.get_value()
    }

    /// Re-query the backend. The state reads as loading until it answers.
    pub fn refresh(&self) {
        let generation = self.next_generation();
        self.resolved.set(false);

        #[cfg(feature = "hydrate")]
        {
            let ctx = *self;
            leptos::task::spawn_local(async move {
                let answer = crate::net::api::fetch_current_user().await;
                ctx.settle(generation, answer);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = generation;
    }

    #[cfg(feature = "hydrate")]
    fn settle(self, generation: u64, answer: Result<Option<User>, ApiError>) {
        let current = self.generation.try_get_value().unwrap_or_default();
        let answer = answer.map_err(|e| e.to_string());
        if let Settlement::Apply(user) = settle_answer(current, generation, answer) {
            let _ = self.user.try_set(user);
            let _ = self.resolved.try_set(true);
        }
    }

    /// Adopt the account returned by a successful login.
    pub fn sign_in(&self, user: User) {
        self.next_generation();
        log::info!("signed in as {}", user.email);
        self.user.set(Some(user));
        self.resolved.set(true);
    }

    /// End the session locally and tell the backend.
    pub fn sign_out(&self) {
        self.next_generation();
        self.user.set(None);
        self.resolved.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::logout().await {
                log::warn!("logout request failed: {e}");
            }
        });
    }
}

/// What consumers see, given the provider's mount and resolution flags.
fn exposed_state(mounted: bool, resolved: bool, settled: AuthState) -> AuthState {
    if mounted && resolved { settled } else { AuthState::loading() }
}

/// Outcome of an `/api/auth/me` answer.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, PartialEq, Eq)]
enum Settlement {
    Apply(Option<User>),
    /// A newer refresh, sign-in or sign-out started after this request.
    Stale,
}

/// Decide whether an answer for `generation` may be applied. Lookup failures
/// settle as signed out so guards don't spin forever.
#[cfg(any(test, feature = "hydrate"))]
fn settle_answer(current: u64, generation: u64, answer: Result<Option<User>, String>) -> Settlement {
    if current != generation {
        log::debug!("discarding auth answer for generation {generation}, current is {current}");
        return Settlement::Stale;
    }
    match answer {
        Ok(user) => Settlement::Apply(user),
        Err(e) => {
            log::warn!("auth state lookup failed: {e}");
            Settlement::Apply(None)
        }
    }
}

/// Provide [`AuthContext`] to `children` and resolve the viewer after mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = AuthContext::new();
    provide_context(ctx);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        if ctx.mounted.get_untracked() {
            return;
        }
        ctx.mounted.set(true);
        ctx.refresh();
    });

    children()
}

/// Auth context of the enclosing [`AuthProvider`].
///
/// # Panics
///
/// Panics when called outside an `AuthProvider` subtree.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
