//! Landing page: hero, category tiles, featured products, member banner.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog;
use crate::components::auth_wrapper::AuthWrapper;
use crate::components::button::{ButtonLink, ButtonSize, ButtonVariant};
use crate::components::product_card::ProductCard;
use crate::routes;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__content">
                <p class="hero__eyebrow">"Autumn / Winter"</p>
                <h1 class="hero__title">"Built for the long way up."</h1>
                <p class="hero__lede">
                    "Weatherproof shells, merino layers and trail essentials, designed in the mountains and made to last."
                </p>
                <div class="hero__actions">
                    <ButtonLink href=routes::SHOP size=ButtonSize::Lg>"Shop the collection"</ButtonLink>
                    <ButtonLink href=routes::ABOUT variant=ButtonVariant::Outline size=ButtonSize::Lg>
                        "Our story"
                    </ButtonLink>
                </div>
            </div>
        </section>

        <section class="home-section">
            <h2 class="home-section__title">"Shop by category"</h2>
            <div class="category-grid">
                {catalog::categories()
                    .iter()
                    .map(|c| {
                        view! {
                            <A href=routes::category(c.slug) attr:class="category-tile">
                                <img class="category-tile__image" src=c.image alt=c.name loading="lazy"/>
                                <span class="category-tile__name">{c.name}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="home-section">
            <h2 class="home-section__title">"Featured"</h2>
            <div class="product-grid">
                {catalog::featured()
                    .into_iter()
                    .map(|p| view! { <ProductCard product=p/> })
                    .collect_view()}
            </div>
        </section>

        <section class="member-banner">
            <AuthWrapper
                require_auth=true
                fallback=|| {
                    view! {
                        <h2>"Members save on every order"</h2>
                        <p>"Create a free account to unlock member pricing across the store."</p>
                        <ButtonLink href=routes::REGISTER variant=ButtonVariant::Secondary>
                            "Become a member"
                        </ButtonLink>
                    }
                }
            >
                <h2>"Member pricing is on"</h2>
                <p>"You're signed in, so member prices show on every product page."</p>
                <ButtonLink href=routes::SHOP variant=ButtonVariant::Secondary>"Keep shopping"</ButtonLink>
            </AuthWrapper>
        </section>
    }
}
