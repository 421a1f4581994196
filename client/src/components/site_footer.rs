//! Footer with brand blurb and secondary links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::STORE_NAME;
use crate::catalog;
use crate::routes;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <p class="site-footer__name">{STORE_NAME}</p>
                <p class="site-footer__blurb">"Technical apparel, made to outlast the season."</p>
            </div>
            <nav class="site-footer__links" aria-label="Footer">
                {catalog::categories()
                    .iter()
                    .map(|c| view! { <A href=routes::category(c.slug)>{c.name}</A> })
                    .collect_view()}
                <A href=routes::ABOUT>"Our story"</A>
                <A href=routes::ACCOUNT>"Account"</A>
            </nav>
            <p class="site-footer__legal">{format!("© {STORE_NAME}. All rights reserved.")}</p>
        </footer>
    }
}
