//! Sidebar links for the signed-in layout.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SideBar() -> impl IntoView {
    view! {
        <aside class="side-bar">
            <ul class="side-bar__links">
                <li><A href="/">"Dashboard"</A></li>
                <li><A href="/settings">"Settings"</A></li>
            </ul>
        </aside>
    }
}
