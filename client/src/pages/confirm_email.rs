//! Email confirmation landing page (`/confirm-email?token=...`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Confirmation links from registration mails land here. The page makes a
//! single backend call per visit; there is no retry. A failed or missing
//! token leaves the viewer with a form to request a fresh link.
//!
//! DESIGN
//! ======
//! The flow is `run_confirmation`, generic over [`EmailConfirmer`] so the
//! outcome logic runs against a mock in tests. The component only maps the
//! outcome onto signals. If the viewer navigates away mid-call, the result
//! is dropped: no state write, no toast.

#[cfg(test)]
#[path = "confirm_email_test.rs"]
mod confirm_email_test;

use std::future::Future;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_query_map;

use crate::components::button::ButtonLink;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::resend_link_form::ResendLinkForm;
use crate::net::api::ApiError;
use crate::net::types::ApiMessage;
use crate::routes;
use crate::state::toast::ToastKind;
use crate::util::notify::use_toasts;

pub const MISSING_TOKEN_MESSAGE: &str =
    "This confirmation link is incomplete. Open the link from your email again, or request a new one below.";
const DEFAULT_CONFIRMED_MESSAGE: &str = "Your email address is confirmed.";
const DEFAULT_FAILED_MESSAGE: &str = "We could not confirm your email address.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmState {
    /// No usable `token` in the link.
    MissingToken,
    Pending,
    Confirmed(String),
    Failed(String),
}

/// Outcome of one confirmation attempt.
#[derive(Debug, PartialEq, Eq)]
pub struct ConfirmOutcome {
    pub state: ConfirmState,
    /// Notification to raise, if any.
    pub toast: Option<(ToastKind, String)>,
}

/// Backend operation the page depends on.
pub trait EmailConfirmer {
    fn confirm_email(&self, token: &str) -> impl Future<Output = Result<ApiMessage, ApiError>>;
}

/// [`EmailConfirmer`] backed by the storefront API.
pub struct BackendConfirmer;

impl EmailConfirmer for BackendConfirmer {
    fn confirm_email(&self, token: &str) -> impl Future<Output = Result<ApiMessage, ApiError>> {
        crate::net::api::confirm_email(token)
    }
}

fn usable_token(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|t| !t.is_empty())
}

/// State to render before the call completes.
pub fn initial_state(token: Option<&str>) -> ConfirmState {
    if usable_token(token).is_some() { ConfirmState::Pending } else { ConfirmState::MissingToken }
}

fn non_empty_or(message: String, default: &str) -> String {
    if message.trim().is_empty() { default.to_owned() } else { message }
}

/// Confirm `token` with a single call and decide what the viewer sees.
pub async fn run_confirmation<C: EmailConfirmer>(api: &C, token: Option<&str>) -> ConfirmOutcome {
    let Some(token) = usable_token(token) else {
        return ConfirmOutcome { state: ConfirmState::MissingToken, toast: None };
    };

    let failed = |message: String| ConfirmOutcome {
        state: ConfirmState::Failed(message.clone()),
        toast: Some((ToastKind::Error, message)),
    };

    match api.confirm_email(token).await {
        Ok(reply) if reply.is_success() => {
            let message = non_empty_or(reply.message, DEFAULT_CONFIRMED_MESSAGE);
            ConfirmOutcome {
                state: ConfirmState::Confirmed(message.clone()),
                toast: Some((ToastKind::Success, message)),
            }
        }
        Ok(reply) => failed(non_empty_or(reply.message, DEFAULT_FAILED_MESSAGE)),
        Err(e) => failed(non_empty_or(e.to_string(), DEFAULT_FAILED_MESSAGE)),
    }
}

#[component]
pub fn ConfirmEmailPage() -> impl IntoView {
    let toasts = use_toasts();
    let token = use_query_map().read_untracked().get("token");
    let state = RwSignal::new(initial_state(token.as_deref()));
    let started = StoredValue::new(false);

    Effect::new(move || {
        if started.get_value() {
            return;
        }
        started.set_value(true);
        if state.get_untracked() != ConfirmState::Pending {
            return;
        }
        let token = token.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = run_confirmation(&BackendConfirmer, token.as_deref()).await;
            if state.try_set(outcome.state).is_some() {
                log::debug!("email confirmation finished after the page was left");
                return;
            }
            if let Some((kind, message)) = outcome.toast {
                crate::util::notify::notify(toasts, kind, message);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, toasts);
    });

    view! {
        <section class="auth-page">
            <div class="auth-card confirm-email">
                {move || match state.get() {
                    ConfirmState::Pending => {
                        view! { <LoadingIndicator label="Confirming your email..."/> }.into_any()
                    }
                    ConfirmState::Confirmed(message) => {
                        view! {
                            <h1>"Email confirmed"</h1>
                            <p class="confirm-email__message confirm-email__message--ok">{message}</p>
                            <ButtonLink href=routes::LOGIN>"Sign in"</ButtonLink>
                        }
                            .into_any()
                    }
                    ConfirmState::Failed(message) => {
                        view! {
                            <h1>"Confirmation failed"</h1>
                            <p class="confirm-email__message confirm-email__message--error">{message}</p>
                            <ResendLinkForm/>
                        }
                            .into_any()
                    }
                    ConfirmState::MissingToken => {
                        view! {
                            <h1>"Confirmation link incomplete"</h1>
                            <p class="confirm-email__message confirm-email__message--error">
                                {MISSING_TOKEN_MESSAGE}
                            </p>
                            <ResendLinkForm/>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
