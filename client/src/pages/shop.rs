//! Category index (`/shop`).

use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog;
use crate::routes;

#[component]
pub fn ShopPage() -> impl IntoView {
    view! {
        <section class="listing">
            <header class="listing__header">
                <h1>"Shop all"</h1>
                <p class="listing__lede">"Every collection, one place."</p>
            </header>
            <div class="category-list">
                {catalog::categories()
                    .iter()
                    .map(|c| {
                        let count = catalog::products_in(c.slug).len();
                        view! {
                            <A href=routes::category(c.slug) attr:class="category-list__item">
                                <img class="category-list__image" src=c.image alt=c.name loading="lazy"/>
                                <div class="category-list__body">
                                    <h2>{c.name}</h2>
                                    <p>{c.tagline}</p>
                                    <span class="category-list__count">{format!("{count} styles")}</span>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
