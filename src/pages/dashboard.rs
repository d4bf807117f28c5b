//! Signed-in landing page.

use leptos::prelude::*;

use crate::state::session::{CurrentUser, SessionStore};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let user = expect_context::<SessionStore>().select::<CurrentUser>();
    let display_name = move || user.with(|u| u.0.as_ref().map(|u| u.display_name.clone())).unwrap_or_default();
    let email = move || user.with(|u| u.0.as_ref().map(|u| u.email.clone())).unwrap_or_default();

    view! {
        <div class="dashboard">
            <h1>"Welcome " {display_name}</h1>
            <p>"Email: " {email}</p>
        </div>
    }
}
