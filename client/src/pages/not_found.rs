//! 404 page.

use leptos::prelude::*;

use crate::components::button::ButtonLink;
use crate::routes;

#[component]
pub fn NotFound() -> impl IntoView {
    // Only the initial server render can set the HTTP status; client-side
    // navigations to a missing page just render the message.
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="prose-page not-found">
            <h1>"Page not found"</h1>
            <p>"The trail ends here. The page you're looking for has moved or never existed."</p>
            <ButtonLink href=routes::HOME>"Back to the store"</ButtonLink>
        </section>
    }
}
