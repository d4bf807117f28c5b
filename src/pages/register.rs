//! Account registration page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::central_container::CentralContainer;
use crate::components::form_feedback::{FieldAlert, FormAlert, FormStatus, run_submission};
use crate::net::api::Gateway;
use crate::net::types::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let password1 = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let gateway = gateway.clone();
        let registration = RegisterForm {
            email: email.get_untracked(),
            password1: password1.get_untracked(),
            password2: password2.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
        };
        run_submission(status, "register you", async move { gateway.register(&registration).await }, |()| {});
    };

    let text_input = move |id: &'static str, kind: &'static str, placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <FieldAlert status=status field=id/>
            <input
                id=format!("register-{id}")
                class="form-input"
                type=kind
                required=true
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <CentralContainer>
            <Show
                when=move || status.with(FormStatus::is_done)
                fallback=move || {
                    view! {
                        <form class="register-form" on:submit=on_submit.clone()>
                            <FormAlert status=status/>
                            {text_input("email", "email", "Enter email", email)}
                            {text_input("first_name", "text", "First Name", first_name)}
                            {text_input("last_name", "text", "Last Name", last_name)}
                            {text_input("password1", "password", "Password", password1)}
                            {text_input("password2", "password", "Password Again", password2)}
                            <button class="form-button" type="submit" disabled=move || status.with(FormStatus::is_busy)>
                                "Register"
                            </button>
                        </form>
                        <div class="form-links">
                            <A href="/login">"Login"</A>
                        </div>
                    }
                }
            >
                <div class="alert alert--info">
                    "Your account has been created. Please click the link in the email to activate your account."
                </div>
            </Show>
        </CentralContainer>
    }
}
