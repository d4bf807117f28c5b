//! Request a password reset email.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::central_container::CentralContainer;
use crate::components::form_feedback::{FieldAlert, FormStatus, run_submission};
use crate::net::api::Gateway;

const RESET_UNAVAILABLE: &str = "Sorry we could not reset your password at this time. Please try again in a few minutes.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let email = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let gateway = gateway.clone();
        let email_value = email.get_untracked();
        run_submission(
            status,
            "reset your password",
            async move { gateway.request_password_reset(&email_value).await },
            |()| {},
        );
    };

    view! {
        <CentralContainer>
            <form class="forgot-password-form" on:submit=on_submit>
                <Show when=move || status.with(|s| s.message().is_some())>
                    <div class="alert alert--danger" role="alert">{RESET_UNAVAILABLE}</div>
                </Show>
                <label for="forgot-password-email">"Email address"</label>
                <FieldAlert status=status field="email"/>
                <input
                    id="forgot-password-email"
                    class="form-input"
                    type="email"
                    required=true
                    placeholder="Enter email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <p class="form-hint">"We'll never share your email with anyone else."</p>
                <Show
                    when=move || status.with(FormStatus::is_done)
                    fallback=move || {
                        view! {
                            <button class="form-button" type="submit" disabled=move || status.with(FormStatus::is_busy)>
                                "Submit Password Reset"
                            </button>
                        }
                    }
                >
                    <div class="alert alert--info">"A password reset email has been sent to the email address."</div>
                </Show>
            </form>
            <div class="form-links">
                <A href="/login">"Back to Login"</A>
            </div>
        </CentralContainer>
    }
}
