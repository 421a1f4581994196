//! Top navigation bar with category links and account actions.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::STORE_NAME;
use crate::catalog;
use crate::components::auth_provider::use_auth;
use crate::components::auth_wrapper::AuthWrapper;
use crate::components::button::{Button, ButtonLink, ButtonSize, ButtonVariant};
use crate::routes;
use crate::state::toast::ToastKind;
use crate::util::notify::{notify, use_toasts};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let user = auth.user();

    let display_name = move || user.get().map(|u| u.name).unwrap_or_default();
    let on_sign_out = Callback::new(move |_| {
        auth.sign_out();
        notify(toasts, ToastKind::Info, "You have been signed out.");
    });

    view! {
        <header class="site-header">
            <A href=routes::HOME attr:class="site-header__brand">
                {STORE_NAME}
            </A>
            <nav class="site-header__nav" aria-label="Shop">
                <A href=routes::SHOP>"Shop all"</A>
                {catalog::categories()
                    .iter()
                    .map(|c| view! { <A href=routes::category(c.slug)>{c.name}</A> })
                    .collect_view()}
                <A href=routes::ABOUT>"About"</A>
            </nav>
            <div class="site-header__account">
                <AuthWrapper
                    require_auth=true
                    fallback=|| {
                        view! {
                            <ButtonLink href=routes::LOGIN variant=ButtonVariant::Outline size=ButtonSize::Sm>
                                "Sign in"
                            </ButtonLink>
                        }
                    }
                >
                    <AuthWrapper require_admin=true>
                        <A href=routes::ADMIN attr:class="site-header__admin">"Admin"</A>
                    </AuthWrapper>
                    <A href=routes::ACCOUNT attr:class="site-header__user">{display_name}</A>
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on_click=on_sign_out>
                        "Sign out"
                    </Button>
                </AuthWrapper>
            </div>
        </header>
    }
}
