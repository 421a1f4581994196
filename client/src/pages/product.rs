//! Product detail page (`/product/:slug`).
//!
//! Member pricing is gated inline: signed-in viewers see the member price,
//! everyone else sees list price and a sign-in prompt that returns here.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::catalog::{self, Product, format_price};
use crate::components::auth_wrapper::AuthWrapper;
use crate::components::button::{ButtonLink, ButtonSize, ButtonVariant};
use crate::pages::not_found::NotFound;
use crate::routes;

/// Line under the pickers describing the current choice.
pub fn selection_summary(color: Option<&str>, size: Option<&str>) -> String {
    match (color, size) {
        (Some(color), Some(size)) => format!("{color}, size {size}"),
        (Some(color), None) => format!("{color}, select a size"),
        (None, Some(size)) => format!("Size {size}, select a color"),
        (None, None) => "Select a color and size".to_owned(),
    }
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || match catalog::find_product(&slug()) {
        Some(product) => view! { <ProductDetail product=product/> }.into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}

#[component]
fn ProductDetail(product: &'static Product) -> impl IntoView {
    let color = RwSignal::new(product.colors.first().copied());
    // One-size products need no size choice.
    let size = RwSignal::new(if product.sizes.len() == 1 { product.sizes.first().copied() } else { None });
    let category = catalog::find_category(product.category);
    let sign_in_href = routes::login_with_next(&routes::product(product.slug));

    view! {
        <article class="product-detail">
            <img class="product-detail__image" src=product.image alt=product.name/>
            <div class="product-detail__info">
                <nav class="breadcrumb" aria-label="Breadcrumb">
                    <A href=routes::SHOP>"Shop"</A>
                    {category
                        .map(|c| {
                            view! {
                                <span class="breadcrumb__sep">"/"</span>
                                <A href=routes::category(c.slug)>{c.name}</A>
                            }
                        })}
                </nav>
                <h1 class="product-detail__name">{product.name}</h1>
                <div class="product-detail__pricing">
                    <AuthWrapper
                        require_auth=true
                        fallback=move || {
                            view! {
                                <p class="price">{format_price(product.price_cents)}</p>
                                <p class="price__hint">
                                    <A href=sign_in_href.clone()>"Sign in"</A>
                                    " to see member pricing."
                                </p>
                            }
                        }
                    >
                        <p class="price price--member">
                            {format_price(product.member_price_cents)}
                            <s class="price__list">{format_price(product.price_cents)}</s>
                        </p>
                        <p class="price__hint">
                            {format!("Members save {}%", product.member_discount_percent())}
                        </p>
                    </AuthWrapper>
                </div>
                <p class="product-detail__description">{product.description}</p>

                <fieldset class="picker">
                    <legend>"Color"</legend>
                    {product
                        .colors
                        .iter()
                        .map(|&c| {
                            view! {
                                <button
                                    type="button"
                                    class="picker__option"
                                    class:selected=move || color.get() == Some(c)
                                    aria-pressed=move || (color.get() == Some(c)).to_string()
                                    on:click=move |_| color.set(Some(c))
                                >
                                    {c}
                                </button>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <fieldset class="picker">
                    <legend>"Size"</legend>
                    {product
                        .sizes
                        .iter()
                        .map(|&s| {
                            view! {
                                <button
                                    type="button"
                                    class="picker__option"
                                    class:selected=move || size.get() == Some(s)
                                    aria-pressed=move || (size.get() == Some(s)).to_string()
                                    on:click=move |_| size.set(Some(s))
                                >
                                    {s}
                                </button>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <p class="product-detail__selection">{move || selection_summary(color.get(), size.get())}</p>

                <AuthWrapper require_admin=true>
                    <ButtonLink href=routes::ADMIN variant=ButtonVariant::Link size=ButtonSize::Sm>
                        "Manage in admin"
                    </ButtonLink>
                </AuthWrapper>
            </div>
        </article>
    }
}
