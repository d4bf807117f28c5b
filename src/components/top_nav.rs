//! Top navigation bar for the signed-in layout.

#[cfg(test)]
#[path = "top_nav_test.rs"]
mod top_nav_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::Gateway;
use crate::net::error::ApiError;
use crate::state::session::CurrentUser;
use crate::util::location::navigate_to;

/// Notice shown after a logout attempt; only failures produce one.
pub fn logout_notice(result: &Result<Option<String>, ApiError>) -> Option<String> {
    result.as_ref().err().map(|e| e.describe("log you out"))
}

#[component]
pub fn TopNav() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let gateway = expect_context::<Gateway>();
    let user = gateway.store().select::<CurrentUser>();
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        notice.set(None);
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            let result = gateway.logout().await;
            notice.set(logout_notice(&result));
            // Sudo logout hands the session back to the admin user elsewhere.
            if let Ok(Some(redirect)) = &result {
                navigate_to(redirect);
            }
            busy.set(false);
        });
    };

    view! {
        <nav class="top-nav">
            <a class="top-nav__title" href="/">{config.project_title}</a>
            <span class="top-nav__user">
                {move || user.get().0.map(|u| u.display_name).unwrap_or_default()}
            </span>
            <Show when=move || notice.with(Option::is_some)>
                <span class="top-nav__notice alert alert--danger" role="alert">
                    {move || notice.get().unwrap_or_default()}
                </span>
            </Show>
            <button class="top-nav__logout" on:click=on_logout disabled=move || busy.get()>
                "Logout"
            </button>
        </nav>
    }
}
