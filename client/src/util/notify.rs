//! Toast helpers.
//!
//! TRADE-OFFS
//! ==========
//! Auto-dismiss needs a browser timer; SSR paths only queue the toast, which
//! is harmless because SSR never produces user-triggered notifications.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL;

/// Toast queue provided by `App`.
pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}

/// Show a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    match kind {
        ToastKind::Error => log::warn!("toast: {message}"),
        ToastKind::Success | ToastKind::Info => log::debug!("toast: {message}"),
    }
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_TTL).await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
