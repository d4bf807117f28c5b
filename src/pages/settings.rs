//! Account settings: change name and change password.

use leptos::prelude::*;

use crate::components::form_feedback::{FieldAlert, FormAlert, FormStatus, run_submission};
use crate::net::api::Gateway;
use crate::state::session::CurrentUser;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="settings">
            <ChangeDetails/>
            <ChangePassword/>
        </div>
    }
}

/// Labelled text input bound to `value`, with its field error above it.
#[component]
fn FormField(
    status: RwSignal<FormStatus>,
    field: &'static str,
    label: &'static str,
    kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    let id = format!("settings-{field}");
    view! {
        <label for=id.clone()>{label}</label>
        <FieldAlert status=status field=field/>
        <input
            id=id
            class="form-input"
            type=kind
            required=true
            placeholder=label
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
fn ChangeDetails() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let CurrentUser(user) = gateway.store().project();
    let first_name = RwSignal::new(user.as_ref().and_then(|u| u.first_name.clone()).unwrap_or_default());
    let last_name = RwSignal::new(user.and_then(|u| u.last_name).unwrap_or_default());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let gateway = gateway.clone();
        let (first, last) = (first_name.get_untracked(), last_name.get_untracked());
        run_submission(
            status,
            "change your details",
            async move { gateway.change_details(&first, &last).await },
            |_| {},
        );
    };

    view! {
        <form class="settings-form" on:submit=on_submit>
            <h3>"Change Details"</h3>
            <Show when=move || status.with(FormStatus::is_done)>
                <div class="alert alert--success">"Details have been updated."</div>
            </Show>
            <FormAlert status=status/>
            <FormField status=status field="first_name" label="First Name" kind="text" value=first_name/>
            <FormField status=status field="last_name" label="Last Name" kind="text" value=last_name/>
            <button class="form-button" type="submit" disabled=move || status.with(FormStatus::is_busy)>
                "Update"
            </button>
        </form>
    }
}

#[component]
fn ChangePassword() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let current_password = RwSignal::new(String::new());
    let password1 = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let gateway = gateway.clone();
        let current = current_password.get_untracked();
        let (p1, p2) = (password1.get_untracked(), password2.get_untracked());
        run_submission(
            status,
            "change your password",
            async move { gateway.change_password(&current, &p1, &p2).await },
            move |()| {
                for field in [current_password, password1, password2] {
                    field.set(String::new());
                }
            },
        );
    };

    view! {
        <form class="settings-form" on:submit=on_submit>
            <h3>"Change Password"</h3>
            <Show when=move || status.with(FormStatus::is_done)>
                <div class="alert alert--success">"Password has been updated."</div>
            </Show>
            <FormAlert status=status/>
            <FormField status=status field="current_password" label="Current Password" kind="password" value=current_password/>
            <FormField status=status field="password1" label="New Password" kind="password" value=password1/>
            <FormField status=status field="password2" label="New Password Again" kind="password" value=password2/>
            <button class="form-button" type="submit" disabled=move || status.with(FormStatus::is_busy)>
                "Update"
            </button>
        </form>
    }
}
