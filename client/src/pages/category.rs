//! Product listing for one category (`/shop/:category`).

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::catalog;
use crate::components::product_card::ProductCard;
use crate::pages::not_found::NotFound;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("category").unwrap_or_default();

    move || {
        let Some(category) = catalog::find_category(&slug()) else {
            return view! { <NotFound/> }.into_any();
        };
        let products = catalog::products_in(category.slug);
        view! {
            <section class="listing">
                <header class="listing__header">
                    <h1>{category.name}</h1>
                    <p class="listing__lede">{category.tagline}</p>
                </header>
                <div class="product-grid">
                    {products.into_iter().map(|p| view! { <ProductCard product=p/> }).collect_view()}
                </div>
            </section>
        }
        .into_any()
    }
}
