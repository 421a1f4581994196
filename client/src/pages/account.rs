//! Signed-in account overview (`/account`, guarded).

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;

use crate::components::auth_guard::AuthGuard;
use crate::components::auth_provider::use_auth;
use crate::components::button::{Button, ButtonVariant};
use crate::components::resend_link_form::ResendLinkForm;
use crate::net::types::{User, UserRole};

pub fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Customer => "Member",
        UserRole::Admin => "Administrator",
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <AuthGuard>
            <AccountDetails/>
        </AuthGuard>
    }
}

#[component]
fn AccountDetails() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();
    let on_sign_out = Callback::new(move |_: leptos::ev::MouseEvent| auth.sign_out());

    view! {
        <section class="account">
            <h1>"Your account"</h1>
            {move || user.get().map(|u| view! { <AccountSummary user=u/> })}
            <Button variant=ButtonVariant::Destructive on_click=on_sign_out>
                "Sign out"
            </Button>
        </section>
    }
}

#[component]
fn AccountSummary(user: User) -> impl IntoView {
    let verified = user.email_verified;
    let email = user.email.clone();

    view! {
        <dl class="account__details">
            <dt>"Name"</dt>
            <dd>{user.name}</dd>
            <dt>"Email"</dt>
            <dd>{user.email}</dd>
            <dt>"Membership"</dt>
            <dd>{role_label(user.role)}</dd>
        </dl>
        <Show
            when=move || verified
            fallback=move || {
                view! {
                    <div class="account__verify">
                        <p>"Your email address is not confirmed yet. We can send you a new link."</p>
                        <ResendLinkForm email=email.clone()/>
                    </div>
                }
            }
        >
            <p class="account__verified">"Email confirmed"</p>
        </Show>
    }
}
