//! Form to request a new email confirmation link.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::pages::register::is_plausible_email;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
#[cfg(feature = "hydrate")]
use crate::util::notify::notify;
use crate::util::notify::use_toasts;

#[component]
pub fn ResendLinkForm(#[prop(optional, into)] email: String) -> impl IntoView {
    let toasts = use_toasts();
    let email = RwSignal::new(email);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        if !is_plausible_email(&email_value) {
            info.set("Enter the email address you registered with.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Sending a new link...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::resend_confirmation(&email_value).await {
                Ok(message) => {
                    let _ = info.try_set(message.clone());
                    notify(toasts, ToastKind::Success, message);
                }
                Err(e) => {
                    let _ = info.try_set(format!("Could not send a new link: {e}"));
                    notify(toasts, ToastKind::Error, e.to_string());
                }
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, toasts);
    };

    view! {
        <form class="auth-form auth-form--inline" on:submit=on_submit>
            <label class="auth-form__label">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <Button kind="submit" variant=ButtonVariant::Secondary disabled=busy>
                "Send a new link"
            </Button>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}
