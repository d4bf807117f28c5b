//! Email and password login page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::central_container::CentralContainer;
use crate::components::form_feedback::{FieldAlert, FormAlert, FormStatus, run_submission};
use crate::config::ClientConfig;
use crate::net::api::Gateway;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let gateway = expect_context::<Gateway>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let gateway = gateway.clone();
        let (email_value, password_value) = (email.get_untracked(), password.get_untracked());
        // Success flips the view gate; the signed-in routes replace this page.
        run_submission(
            status,
            "log you in",
            async move { gateway.login(&email_value, &password_value).await },
            |_| {},
        );
    };

    view! {
        <CentralContainer>
            <div class="login-card">
                <h1 class="login-card__title">{config.project_title}</h1>
                <form class="login-form" on:submit=on_submit>
                    <FormAlert status=status/>
                    <label for="login-email">"Email address"</label>
                    <FieldAlert status=status field="email"/>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="Enter email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="login-password">"Password"</label>
                    <FieldAlert status=status field="password"/>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || status.with(FormStatus::is_busy)>
                        "Login"
                    </button>
                </form>
                <div class="login-links">
                    <A href="/register">"Register"</A>
                    <A href="/forgot_password">"Forgot Password"</A>
                </div>
            </div>
        </CentralContainer>
    }
}
