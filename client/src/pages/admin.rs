//! Merchandising overview for administrators (`/admin`, admin-guarded).

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::{self, Product, format_price};
use crate::components::auth_guard::AuthGuard;
use crate::routes;

/// Headline numbers for the catalog.
#[derive(Debug, PartialEq, Eq)]
pub struct CatalogSummary {
    pub categories: usize,
    pub products: usize,
    pub featured: usize,
    /// Mean member discount in whole percent, rounded down.
    pub avg_member_discount: u32,
}

pub fn summarize(categories: usize, products: &[Product]) -> CatalogSummary {
    let featured = products.iter().filter(|p| p.featured).count();
    let total: u32 = products.iter().map(Product::member_discount_percent).sum();
    let avg_member_discount = u32::try_from(products.len()).ok().filter(|n| *n > 0).map_or(0, |n| total / n);
    CatalogSummary { categories, products: products.len(), featured, avg_member_discount }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <AuthGuard require_admin=true>
            <AdminDashboard/>
        </AuthGuard>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let summary = summarize(catalog::categories().len(), catalog::products());

    view! {
        <section class="admin">
            <h1>"Catalog"</h1>
            <div class="admin__stats">
                <div class="stat">
                    <span class="stat__value">{summary.categories}</span>
                    <span class="stat__label">"Categories"</span>
                </div>
                <div class="stat">
                    <span class="stat__value">{summary.products}</span>
                    <span class="stat__label">"Products"</span>
                </div>
                <div class="stat">
                    <span class="stat__value">{summary.featured}</span>
                    <span class="stat__label">"Featured"</span>
                </div>
                <div class="stat">
                    <span class="stat__value">{format!("{}%", summary.avg_member_discount)}</span>
                    <span class="stat__label">"Avg. member saving"</span>
                </div>
            </div>
            <table class="admin__table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th>"Category"</th>
                        <th>"List"</th>
                        <th>"Member"</th>
                        <th>"Featured"</th>
                    </tr>
                </thead>
                <tbody>
                    {catalog::products()
                        .iter()
                        .map(|p| {
                            view! {
                                <tr>
                                    <td>
                                        <A href=routes::product(p.slug)>{p.name}</A>
                                    </td>
                                    <td>{p.category}</td>
                                    <td>{format_price(p.price_cents)}</td>
                                    <td>{format_price(p.member_price_cents)}</td>
                                    <td>{if p.featured { "Yes" } else { "" }}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
