//! Brand story page.

use leptos::prelude::*;

use crate::components::button::ButtonLink;
use crate::routes;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="prose-page">
            <h1>"Our story"</h1>
            <p>
                "Ridgeline started in a garage at the foot of the range, repairing jackets that had given up too early. "
                "Everything we make now starts from the same question: will this still work in ten winters?"
            </p>
            <h2>"Materials"</h2>
            <p>
                "We use recycled face fabrics, responsibly sourced down and mulesing-free merino, and we publish the mill "
                "behind every product."
            </p>
            <h2>"Repairs"</h2>
            <p>"Every garment carries a lifetime repair promise. Send it back and we will fix it."</p>
            <ButtonLink href=routes::SHOP>"Shop the collection"</ButtonLink>
        </section>
    }
}
