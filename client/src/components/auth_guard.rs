//! Route guard for signed-in (optionally admin) content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps protected page bodies. Signed-out viewers are sent to login with a
//! `next` return path; signed-in non-admins on admin routes are sent home.

#[cfg(all(test, feature = "ssr"))]
#[path = "auth_guard_test.rs"]
mod auth_guard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::auth_provider::use_auth;
use crate::components::loading_indicator::LoadingIndicator;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardState, install_guard_redirect};

/// Render `children` only for authorized viewers.
///
/// `state` overrides the provider's context, mainly for previews and tests
/// of pages in isolation.
#[component]
pub fn AuthGuard(
    #[prop(optional)] require_admin: bool,
    #[prop(optional, into)] state: Option<Signal<AuthState>>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = state.unwrap_or_else(|| use_auth().state());
    let decision = Memo::new(move |_| GuardState::evaluate(&state.get(), require_admin));

    let location = use_location();
    let current_path = move || {
        let path = location.pathname.get_untracked();
        let search = location.search.get_untracked();
        let search = search.trim_start_matches('?');
        if search.is_empty() { path } else { format!("{path}?{search}") }
    };
    install_guard_redirect(decision, current_path, use_navigate());

    move || match decision.get() {
        GuardState::Checking => view! { <LoadingIndicator/> }.into_any(),
        GuardState::Authorized => children().into_any(),
        GuardState::Unauthorized | GuardState::InsufficientPrivilege => ().into_any(),
    }
}
