//! Inline auth gate that swaps in a fallback instead of navigating.

#[cfg(all(test, feature = "ssr"))]
#[path = "auth_wrapper_test.rs"]
mod auth_wrapper_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::auth_provider::use_auth;
use crate::state::auth::AuthState;
use crate::util::auth::wrapper_allows;

/// Render `children` when the viewer meets the requirements, else `fallback`
/// (nothing by default). Without `require_auth`/`require_admin` there is no
/// gating and the auth context is not consulted.
#[component]
pub fn AuthWrapper(
    #[prop(optional)] require_auth: bool,
    #[prop(optional)] require_admin: bool,
    #[prop(optional, into)] fallback: ViewFn,
    #[prop(optional, into)] state: Option<Signal<AuthState>>,
    children: ChildrenFn,
) -> impl IntoView {
    if !require_auth && !require_admin {
        return children().into_any();
    }

    let state = state.unwrap_or_else(|| use_auth().state());
    let allowed = Memo::new(move |_| wrapper_allows(&state.get(), require_auth, require_admin));

    view! { {move || if allowed.get() { children().into_any() } else { fallback.run() }} }.into_any()
}
