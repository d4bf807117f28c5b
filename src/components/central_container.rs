//! Centered single-column container used by the signed-out pages.

use leptos::prelude::*;

#[component]
pub fn CentralContainer(children: Children) -> impl IntoView {
    view! {
        <div class="central-container">
            <div class="central-item">{children()}</div>
        </div>
    }
}
