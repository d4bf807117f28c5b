//! Fallback page for unknown signed-in routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <p>"Sorry we could not find that page."</p>
        </div>
    }
}
