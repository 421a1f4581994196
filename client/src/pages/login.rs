//! Sign-in page with email + password.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards send signed-out viewers here with `?next=<path>`. A successful
//! login only updates the auth context; the settled signed-in state then
//! drives the navigation to `next`, so an already signed-in visitor skips the
//! form the same way.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::auth_provider::use_auth;
use crate::components::button::{Button, ButtonSize};
use crate::pages::register::is_plausible_email;
use crate::routes;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
#[cfg(feature = "hydrate")]
use crate::util::notify::notify;
use crate::util::notify::use_toasts;

/// Trim and check the sign-in fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email address.");
    }
    if !is_plausible_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where to go after signing in. Auth pages are never a destination.
pub fn post_login_path(next: Option<&str>) -> String {
    match routes::sanitize_next(next) {
        Some(path) if !is_auth_page(&path) => path,
        _ => routes::ACCOUNT.to_owned(),
    }
}

fn is_auth_page(path: &str) -> bool {
    let bare = path.split(['?', '#']).next().unwrap_or(path);
    bare == routes::LOGIN || bare == routes::REGISTER
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let auth_state = auth.state();
    Effect::new(move || {
        if auth_state.get().is_signed_in() {
            let next = post_login_path(query.read_untracked().get("next").as_deref());
            navigate(&next, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(fields) => fields,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(user) => {
                    notify(toasts, ToastKind::Success, format!("Welcome back, {}.", user.name));
                    let _ = info.try_set(String::new());
                    auth.sign_in(user);
                }
                Err(e) => {
                    let _ = info.try_set(format!("Sign-in failed: {e}"));
                    let _ = password.try_set(String::new());
                    notify(toasts, ToastKind::Error, e.to_string());
                }
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, toasts);
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__subtitle">"Welcome back to Ridgeline."</p>
                <form class="auth-form" on:submit=on_submit>
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
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Button kind="submit" size=ButtonSize::Lg disabled=busy>
                        "Sign in"
                    </Button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-form__message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "New here? "
                    <A href=routes::REGISTER>"Create an account"</A>
                </p>
            </div>
        </section>
    }
}
