//! Account registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registration does not sign the viewer in: the backend mails a confirmation
//! link that lands on `/confirm-email`. The page shows the backend's message
//! and points to sign-in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::button::{Button, ButtonSize};
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
#[cfg(feature = "hydrate")]
use crate::util::notify::notify;
use crate::routes;
use crate::util::notify::use_toasts;

/// Shortest password the form accepts.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Trimmed, validated registration fields.
#[derive(Debug, PartialEq, Eq)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Cheap shape check; the backend does the real validation.
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

pub fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if !is_plausible_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Use at least 8 characters for your password.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterInput { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = use_toasts();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_register_input(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&input.name, &input.email, &input.password).await {
                Ok(message) => {
                    let _ = password.try_set(String::new());
                    let _ = confirm.try_set(String::new());
                    let _ = done.try_set(true);
                    let _ = info.try_set(message.clone());
                    notify(toasts, ToastKind::Success, message);
                }
                Err(e) => {
                    let _ = info.try_set(format!("Registration failed: {e}"));
                    notify(toasts, ToastKind::Error, e.to_string());
                }
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (input, toasts);
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <p class="auth-card__subtitle">"Members see member pricing across the store."</p>
                <Show
                    when=move || !done.get()
                    fallback=move || {
                        view! {
                            <p class="auth-form__message">{move || info.get()}</p>
                            <A href=routes::LOGIN attr:class="btn btn--primary btn--md">"Go to sign in"</A>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Name"
                            <input
                                class="auth-form__input"
                                type="text"
                                autocomplete="name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Email"
                            <input
                                class="auth-form__input"
                                type="email"
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Confirm password"
                            <input
                                class="auth-form__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                        <Button kind="submit" size=ButtonSize::Lg disabled=busy>
                            "Create account"
                        </Button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="auth-form__message">{move || info.get()}</p>
                    </Show>
                    <p class="auth-card__switch">
                        "Already a member? "
                        <A href=routes::LOGIN>"Sign in"</A>
                    </p>
                </Show>
            </div>
        </section>
    }
}
