//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::toaster::Toaster;
use crate::pages::{
    about::AboutPage, account::AccountPage, admin::AdminPage, category::CategoryPage,
    confirm_email::ConfirmEmailPage, home::HomePage, login::LoginPage, not_found::NotFound,
    product::ProductPage, register::RegisterPage, shop::ShopPage,
};
use crate::state::toast::ToastState;

/// Brand name used in chrome and titles.
pub const STORE_NAME: &str = "Ridgeline";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast queue and auth context, then lays out the header,
/// routed page body and footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text=STORE_NAME/>
        <Meta name="description" content="Technical apparel for mountain days: shells, merino layers and trail essentials."/>
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg"/>

        <AuthProvider>
            <Router>
                <SiteHeader/>
                <main class="site-main">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("shop") view=ShopPage/>
                        <Route path=(StaticSegment("shop"), ParamSegment("category")) view=CategoryPage/>
                        <Route path=(StaticSegment("product"), ParamSegment("slug")) view=ProductPage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("confirm-email") view=ConfirmEmailPage/>
                        <Route path=StaticSegment("account") view=AccountPage/>
                        <Route path=StaticSegment("admin") view=AdminPage/>
                    </Routes>
                </main>
                <SiteFooter/>
                <Toaster/>
            </Router>
        </AuthProvider>
    }
}
