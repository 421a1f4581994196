//! Product tile used by listings and the home page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::{Product, format_price};
use crate::routes;

#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    let colors = product.colors.len();
    let swatch_label = if colors == 1 { "1 color".to_owned() } else { format!("{colors} colors") };

    view! {
        <A href=routes::product(product.slug) attr:class="product-card">
            <img class="product-card__image" src=product.image alt=product.name loading="lazy"/>
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name}</h3>
                <p class="product-card__price">{format_price(product.price_cents)}</p>
                <p class="product-card__swatches">{swatch_label}</p>
            </div>
        </A>
    }
}
